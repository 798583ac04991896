/// Position of a marker relative to the active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStatus {
	/// Before the active section.
	Past,
	/// The active section.
	Active,
	/// After the active section, or no section is active.
	Future,
}

impl MarkerStatus {
	/// CSS classes for the marker's `<li>`.
	pub fn class(self) -> &'static str {
		match self {
			MarkerStatus::Past => "section-nav-marker past",
			MarkerStatus::Active => "section-nav-marker active",
			MarkerStatus::Future => "section-nav-marker future",
		}
	}
}

/// Status of marker `index`. With no active section every marker is future.
pub fn marker_status(index: usize, active_index: Option<usize>) -> MarkerStatus {
	match active_index {
		Some(active) if index == active => MarkerStatus::Active,
		Some(active) if index < active => MarkerStatus::Past,
		_ => MarkerStatus::Future,
	}
}

/// Status of every marker in `ids`, given the active section's id.
pub fn marker_statuses<S: AsRef<str>>(ids: &[S], active: Option<&str>) -> Vec<MarkerStatus> {
	let active_index = active.and_then(|a| ids.iter().position(|id| id.as_ref() == a));
	(0..ids.len()).map(|i| marker_status(i, active_index)).collect()
}
