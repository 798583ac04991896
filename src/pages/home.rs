use leptos::prelude::*;
use log::info;

use crate::components::hex_network::{HexNode, HexaNetworkAdvanced, NavigateCommand, NodeContent};
use crate::components::particles::ReactiveParticlesBackground;
use crate::components::reactive_grid::ReactiveGridBackground;
use crate::components::section_nav::{SectionItem, SectionNav};

/// Portfolio sections laid out on a loose hex lattice.
fn portfolio_sections() -> Vec<HexNode<NodeContent>> {
	let section = |id: &str, label: &str, position: (f64, f64), neighbors: &[&str], body: &str| HexNode {
		id: id.into(),
		label: label.into(),
		position,
		neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
		content: NodeContent {
			title: label.into(),
			body: body.into(),
		},
	};
	vec![
		section(
			"about",
			"About",
			(0.0, 0.0),
			&["projects", "experience"],
			"Engineer working on interactive graphics and the systems behind them.",
		),
		section(
			"projects",
			"Projects",
			(320.0, -190.0),
			&["about", "skills"],
			"Selected work: visualisation tools, editors and small simulations.",
		),
		section(
			"experience",
			"Experience",
			(320.0, 190.0),
			&["about", "skills"],
			"Roles, teams and the products shipped along the way.",
		),
		section(
			"skills",
			"Skills",
			(640.0, 0.0),
			&["projects", "experience", "contact"],
			"Languages, tooling and the parts of the stack I enjoy most.",
		),
		section(
			"contact",
			"Contact",
			(960.0, 0.0),
			&["skills"],
			"Say hello.",
		),
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let sections = portfolio_sections();
	let items: Vec<SectionItem> = sections
		.iter()
		.map(|s| SectionItem {
			id: s.id.clone(),
			label: s.label.clone(),
		})
		.collect();
	// The network opens on the first section.
	let initial = sections.first().map(|s| s.id.clone());

	let nodes = Signal::derive(move || sections.clone());
	let items = Signal::derive(move || items.clone());
	let active = RwSignal::new(initial);
	let navigate = RwSignal::new(None::<NavigateCommand>);
	let zoom_out = RwSignal::new(None::<u64>);
	let on_active_change = Callback::new(move |id: String| {
		info!("section changed: {id}");
		active.set(Some(id));
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-network">
				<ReactiveGridBackground />
				<ReactiveParticlesBackground />
				<HexaNetworkAdvanced
					nodes=nodes
					navigate=navigate
					zoom_out=Signal::derive(move || zoom_out.get())
					on_active_change=on_active_change
				/>
				<SectionNav items=items active=active navigate=navigate zoom_out=zoom_out />
			</div>
		</ErrorBoundary>
	}
}
