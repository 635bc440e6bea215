//! Product edit page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the product named in the route, mounts the editor with it, and
//! supplies the save handler that writes the record back.

#[cfg(test)]
#[path = "product_edit_test.rs"]
mod product_edit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_editor::ProductEditor;
use crate::net::error::ApiError;
use crate::state::product_form::ProductForm;

/// Outcome banner shown after a save attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveNotice {
    Saved,
    Failed(String),
}

impl SaveNotice {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Saved => "notice notice--success",
            Self::Failed(_) => "notice notice--error",
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::Saved => "Saved".to_owned(),
            Self::Failed(message) => format!("Save failed: {message}"),
        }
    }
}

#[component]
pub fn ProductEditPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let record = RwSignal::new(None::<ProductForm>);
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<SaveNotice>);

    Effect::new(move || {
        let id = product_id.get();
        record.set(None);
        load_error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_product(&id).await;
            // The route may have moved on while this request was in flight.
            if product_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(form) => record.set(Some(form)),
                Err(e) => {
                    leptos::logging::warn!("product fetch failed: id={id} error={e}");
                    load_error.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_save = Callback::new(move |form: ProductForm| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        notice.set(None);
        let id = product_id.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_product(&id, &form).await;
            if let Err(e) = &result {
                leptos::logging::warn!("product save failed: id={id} error={e}");
            }
            notice.set(Some(SaveNotice::from_result(&result)));
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, form);
            notice.set(Some(SaveNotice::from_result(&Err(ApiError::Unavailable))));
            saving.set(false);
        }
    });

    view! {
        <div class="product-edit-page">
            <header class="product-edit-page__header toolbar">
                <a class="toolbar__back" href="/admin/comments">"← Back"</a>
                <span class="toolbar__title">"Edit product"</span>
                <span class="toolbar__spacer"></span>
                {move || {
                    notice
                        .get()
                        .map(|n| view! { <span class=n.class() role="status">{n.text()}</span> })
                }}
            </header>

            <Show when=move || load_error.get().is_some()>
                <p class="product-edit-page__error" role="alert">
                    {move || load_error.get().unwrap_or_default()}
                </p>
            </Show>

            {move || match record.get() {
                Some(form) => view! { <ProductEditor initial=form saving=saving on_save=on_save/> }.into_any(),
                None if load_error.with(Option::is_none) => {
                    view! { <p class="product-edit-page__loading">"Loading product..."</p> }.into_any()
                }
                None => ().into_any(),
            }}
        </div>
    }
}
