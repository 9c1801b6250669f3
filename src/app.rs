use std::sync::Arc;

use dioxus::prelude::*;
use shipcards_core::DeepLinkRequest;

use crate::context::{get_launch_options, CatalogState, PendingLink, SharedCatalog};
use crate::pages::{Cards, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the "Explore the Cards" button
/// - `/cards?category=..&cardId=..` - The deck, optionally opened on a shared card
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/cards?:..query")]
    Cards { query: DeepLinkRequest },
}

/// Root application component.
///
/// Provides global styles, the catalog and site context, and routing.
#[component]
pub fn App() -> Element {
    let options = use_hook(get_launch_options);

    let mut catalog: Signal<CatalogState> = use_signal(|| CatalogState::Loading);
    let pending_link: Signal<PendingLink> =
        use_signal(|| PendingLink(options.initial_link.clone()));

    use_context_provider(|| catalog);
    use_context_provider(|| pending_link);
    use_context_provider(|| options.site.clone());
    use_context_provider(|| options.deck);

    // Load the catalog once on mount
    let source = options.source.clone();
    use_effect(move || {
        let source = source.clone();
        spawn(async move {
            match source.load().await {
                Ok(loaded) => {
                    catalog.set(CatalogState::Ready(SharedCatalog(Arc::new(loaded))));
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog: {}", e);
                    catalog.set(CatalogState::failed());
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
