//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Redirect, Route, Router, Routes},
};

use crate::net::api::CommentQueryMode;
use crate::pages::{comments::CommentsPage, product_edit::ProductEditPage};
use crate::state::{comments::CommentsState, ui::UiState};
use crate::util::locale::Locale;
use crate::util::page_meta::{COMMENT_QUERY_MODE_META, read_document_lang, read_meta};

/// Host-controlled settings the client needs at startup.
///
/// On the server the host provides this as context; in the browser it is
/// read back from the rendered shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub query_mode: CommentQueryMode,
    pub locale: Locale,
}

impl ClientConfig {
    /// Read the settings the shell rendered into the document.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_document(read_meta(COMMENT_QUERY_MODE_META).as_deref(), read_document_lang().as_deref())
    }

    /// Build from raw document values. Missing or unknown values fall back to defaults.
    #[must_use]
    pub fn from_document(query_mode: Option<&str>, lang: Option<&str>) -> Self {
        Self {
            query_mode: query_mode.and_then(CommentQueryMode::parse).unwrap_or_default(),
            locale: lang.map(Locale::from_tag).unwrap_or_default(),
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=config.locale.tag() dir=config.locale.dir()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=COMMENT_QUERY_MODE_META content=config.query_mode.as_str()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    let comments = RwSignal::new(CommentsState::default());
    let ui = RwSignal::new(UiState { locale: config.locale, ..UiState::default() });

    provide_context(config);
    provide_context(comments);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-admin.css"/>
        <Title text="Storefront Admin"/>

        <Router>
            <nav class="admin-nav">
                <span class="admin-nav__brand">"Storefront Admin"</span>
                <A href="/admin/comments">"Comments"</A>
            </nav>
            <main class="admin-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/admin/comments"/> }/>
                    <Route path=(StaticSegment("admin"), StaticSegment("comments")) view=CommentsPage/>
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("products"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=ProductEditPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
