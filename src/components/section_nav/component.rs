use leptos::prelude::*;

use super::state::marker_statuses;
use crate::components::hex_network::NavigateCommand;

/// One entry in the progress indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionItem {
	/// Network node id this marker navigates to.
	pub id: String,
	/// Accessible name, shown as the marker's tooltip.
	pub label: String,
}

/// Ordered progress markers over the network's active section. Clicking a
/// marker publishes a fresh navigate command.
#[component]
pub fn SectionNav(
	/// Markers in display order.
	#[prop(into)]
	items: Signal<Vec<SectionItem>>,
	/// Id of the section the network last settled on.
	#[prop(into)]
	active: Signal<Option<String>>,
	/// Command slot shared with the network.
	navigate: RwSignal<Option<NavigateCommand>>,
	/// Zoom-out counter shared with the network; adds an overview button.
	#[prop(optional)]
	zoom_out: Option<RwSignal<Option<u64>>>,
) -> impl IntoView {
	let markers = move || {
		let items = items.get();
		let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
		let statuses = marker_statuses(&ids, active.get().as_deref());
		items
			.iter()
			.zip(statuses)
			.map(|(item, status)| {
				let target = item.id.clone();
				let on_click = move |_: web_sys::MouseEvent| {
					navigate.update(|cmd| {
						let counter = cmd.as_ref().map_or(0, |c| c.counter + 1);
						*cmd = Some(NavigateCommand {
							target: target.clone(),
							counter,
						});
					});
				};
				view! {
					<li class=status.class()>
						<button on:click=on_click title=item.label.clone()>
							<span class="section-nav-label">{item.label.clone()}</span>
						</button>
					</li>
				}
			})
			.collect_view()
	};

	let overview = zoom_out.map(|zoom_out| {
		let on_click = move |_: web_sys::MouseEvent| {
			zoom_out.update(|counter| *counter = Some(counter.map_or(0, |c| c + 1)));
		};
		view! {
			<button class="section-nav-overview" on:click=on_click>
				"Overview"
			</button>
		}
	});

	view! {
		<nav class="section-nav">
			{overview}
			<ol>{markers}</ol>
		</nav>
	}
}
