//! Admin view: catalog products and user accounts, with create forms for both.

#[cfg(all(test, feature = "ssr"))]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::notice_line::NoticeLine;
use crate::net::api::{CatalogApi, HttpCatalogApi};
use crate::net::error::ConsoleError;
use crate::net::types::{NewProduct, Product};
use crate::pages::session_token;
use crate::state::catalog::{AdminViewState, create_account_and_reload, load_admin, note_failure};
use crate::state::session::SessionState;

type ImageInput = NodeRef<leptos::html::Input>;

#[cfg(feature = "hydrate")]
fn chosen_image(input: ImageInput) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

fn clear_image(input: ImageInput) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = input;
}

/// Multipart upload when an image is chosen, plain JSON otherwise.
async fn send_product(token: &str, product: &NewProduct, image: ImageInput) -> Result<Product, ConsoleError> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(file) = chosen_image(image) {
            return HttpCatalogApi.create_product_with_image(token, product, &file).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = image;
    HttpCatalogApi.create_product(token, product).await
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(AdminViewState::default());
    let image_ref: ImageInput = NodeRef::new();

    let reload = move || {
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            let load = load_admin(&HttpCatalogApi, &token).await;
            state.update(|s| s.apply_load(load));
        });
    };

    Effect::new(move || {
        reload();
    });

    let products = Memo::new(move |_| state.with(|s| s.products.clone()));
    let accounts = Memo::new(move |_| state.with(|s| s.accounts.clone()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    let on_create_product = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let product = match state.with_untracked(AdminViewState::validated_product) {
            Ok(product) => product,
            Err(e) => {
                state.update(|s| s.notice = Some(e.notice("Adding product")));
                return;
            }
        };
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            match send_product(&token, &product, image_ref).await {
                Ok(created) => {
                    leptos::logging::log!("product {} created", created.id);
                    state.update(AdminViewState::reset_product_draft);
                    clear_image(image_ref);
                    reload();
                }
                Err(e) => state.update(|s| note_failure(&mut s.notice, "Adding product", &e)),
            }
        });
    };

    let on_create_account = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account = match state.with_untracked(AdminViewState::validated_account) {
            Ok(account) => account,
            Err(e) => {
                state.update(|s| s.notice = Some(e.notice("Adding user")));
                return;
            }
        };
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            match create_account_and_reload(&HttpCatalogApi, &token, &account).await {
                Ok(load) => state.update(|s| {
                    s.reset_account_draft();
                    s.apply_load(load);
                }),
                Err(e) => state.update(|s| note_failure(&mut s.notice, "Adding user", &e)),
            }
        });
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Admin Dashboard"</h1>
                <LogoutButton/>
            </header>
            <NoticeLine notice=notice/>

            <section class="admin-page__section">
                <h2>"Products"</h2>
                <form class="admin-page__form" on:submit=on_create_product>
                    <input
                        type="text"
                        placeholder="Product Name"
                        required
                        prop:value=move || state.with(|s| s.product_draft.name.clone())
                        on:input=move |ev| state.update(|s| s.product_draft.name = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Product Description"
                        required
                        prop:value=move || state.with(|s| s.product_draft.description.clone())
                        on:input=move |ev| state.update(|s| s.product_draft.description = event_target_value(&ev))
                    ></textarea>
                    <input type="file" accept="image/*" node_ref=image_ref/>
                    <button class="btn btn--primary" type="submit">
                        "Add Product"
                    </button>
                </form>
                <ul class="admin-page__list">
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| {
                                let description = product.description.unwrap_or_default();
                                let image = product.review_image.map(|src| {
                                    view! { <img class="admin-page__thumb" src=src alt="Review"/> }
                                });
                                view! {
                                    <li class="admin-page__item">
                                        <strong>{product.name}</strong>
                                        <span class="admin-page__desc">{description}</span>
                                        {image}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="admin-page__section">
                <h2>"Users"</h2>
                <form class="admin-page__form" on:submit=on_create_account>
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || state.with(|s| s.account_draft.user.username.clone())
                        on:input=move |ev| state.update(|s| s.account_draft.user.username = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || state.with(|s| s.account_draft.user.email.clone())
                        on:input=move |ev| state.update(|s| s.account_draft.user.email = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || state.with(|s| s.account_draft.user.password.clone())
                        on:input=move |ev| state.update(|s| s.account_draft.user.password = event_target_value(&ev))
                    />
                    <input
                        type="tel"
                        placeholder="Telephone"
                        prop:value=move || state.with(|s| s.account_draft.telephone.clone())
                        on:input=move |ev| state.update(|s| s.account_draft.telephone = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Add User"
                    </button>
                </form>
                <ul class="admin-page__list">
                    {move || {
                        accounts
                            .get()
                            .into_iter()
                            .map(|account| {
                                let owned = format!("{} products", account.products.len());
                                view! {
                                    <li class="admin-page__item">
                                        <strong>{account.user.username}</strong>
                                        <span>{account.user.email}</span>
                                        <span>{account.telephone}</span>
                                        <span class="admin-page__meta">{owned}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
