//! User view: personal product list, catalog browser, rename and research.
//!
//! Research results open in a dialog that can turn selected features into ad
//! copy through the completion client. A key typed there is promoted to the
//! shared API key store once a generation succeeds.

use leptos::prelude::*;

use crate::components::edit_product_dialog::EditProductDialog;
use crate::components::logout_button::LogoutButton;
use crate::components::notice_line::NoticeLine;
use crate::components::research_dialog::ResearchDialog;
use crate::net::api::HttpCatalogApi;
use crate::net::completion::OpenAiCompletion;
use crate::pages::session_token;
use crate::state::advert::{AD_FAILURE_MESSAGE, FeatureSelection, generate_advert};
use crate::state::api_key::ApiKeyHolder;
use crate::state::catalog::{
    Membership, UserViewState, change_membership, load_user, note_failure, run_research, save_rename,
};
use crate::state::research::ResearchSummary;
use crate::state::session::SessionState;
use crate::util::prompt::blocking_prompt;

#[component]
pub fn UserPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let keys = expect_context::<RwSignal<ApiKeyHolder>>();
    let state = RwSignal::new(UserViewState::default());

    let research = RwSignal::new(None::<ResearchSummary>);
    let selection = RwSignal::new(FeatureSelection::default());
    let temp_key = RwSignal::new(String::new());
    let ad_text = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);

    let reload = move || {
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            let load = load_user(&HttpCatalogApi, &token).await;
            state.update(|s| s.apply_load(load));
        });
    };

    Effect::new(move || {
        reload();
    });

    let mine = Memo::new(move |_| state.with(|s| s.mine.clone()));
    let all = Memo::new(move |_| state.with(|s| s.all.clone()));
    let editing_open = Memo::new(move |_| state.with(|s| s.editing.is_some()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    let apply_change = move |id: i64, change: Membership| {
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            match change_membership(&HttpCatalogApi, &token, id, change).await {
                Ok(load) => state.update(|s| s.apply_load(load)),
                Err(e) => state.update(|s| note_failure(&mut s.notice, change.action(), &e)),
            }
        });
    };
    let on_add = Callback::new(move |id: i64| apply_change(id, Membership::Add));
    let on_remove = Callback::new(move |id: i64| apply_change(id, Membership::Remove));

    let on_research = Callback::new(move |id: i64| {
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            match run_research(&HttpCatalogApi, &token, id).await {
                Ok((summary, picks)) => {
                    selection.set(picks);
                    ad_text.set(None);
                    research.set(Some(summary));
                }
                Err(e) => state.update(|s| note_failure(&mut s.notice, "Researching product", &e)),
            }
        });
    });

    let on_save_edit = Callback::new(move |()| {
        let Some(editing) = state.with_untracked(|s| s.editing.clone()) else {
            return;
        };
        let token = session_token(session);
        leptos::task::spawn_local(async move {
            match save_rename(&HttpCatalogApi, &token, &editing).await {
                Ok(updated) => state.update(|s| s.apply_rename(updated.id, &updated.name)),
                Err(e) => state.update(|s| note_failure(&mut s.notice, "Renaming product", &e)),
            }
        });
    });

    let on_generate = Callback::new(move |()| {
        let Some(summary) = research.get_untracked() else {
            return;
        };
        if generating.get_untracked() {
            return;
        }
        let held = keys.get_untracked();
        let typed = temp_key.get_untracked();
        let picks = selection.get_untracked();
        generating.set(true);
        leptos::task::spawn_local(async move {
            match generate_advert(&OpenAiCompletion::default(), &held, &typed, &summary, &picks).await {
                Ok(copy) => {
                    if let Some(key) = copy.promote_key {
                        keys.update(|k| k.set(key));
                    }
                    ad_text.set(Some(copy.text));
                }
                Err(e) if e.is_validation_gap() => blocking_prompt(&e.to_string()),
                Err(e) => {
                    leptos::logging::warn!("advertisement generation failed: {e}");
                    ad_text.set(Some(AD_FAILURE_MESSAGE.to_owned()));
                }
            }
            generating.set(false);
        });
    });

    let on_close_research = Callback::new(move |()| {
        research.set(None);
        ad_text.set(None);
    });

    view! {
        <div class="user-page">
            <header class="page-header">
                <h1>"User Dashboard"</h1>
                <LogoutButton/>
            </header>
            <NoticeLine notice=notice/>

            <section class="user-page__section">
                <h2>"My Products"</h2>
                <ul class="user-page__list">
                    {move || {
                        mine.get()
                            .into_iter()
                            .map(|product| {
                                let id = product.id;
                                let edit_target = product.clone();
                                view! {
                                    <li class="user-page__item">
                                        <span class="user-page__name">{product.name}</span>
                                        <button class="btn" on:click=move |_| on_research.run(id)>
                                            "Research"
                                        </button>
                                        <button
                                            class="btn"
                                            on:click=move |_| state.update(|s| s.begin_edit(&edit_target))
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn--outlined" on:click=move |_| on_remove.run(id)>
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="user-page__section">
                <h2>"All Products"</h2>
                <ul class="user-page__list">
                    {move || {
                        all.get()
                            .into_iter()
                            .map(|product| {
                                let id = product.id;
                                let owned = move || state.with(|s| s.owns(id));
                                view! {
                                    <li class="user-page__item">
                                        <span class="user-page__name">{product.name}</span>
                                        <button
                                            class="btn btn--primary"
                                            prop:disabled=owned
                                            on:click=move |_| on_add.run(id)
                                        >
                                            "Add to My Products"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <Show when=move || editing_open.get()>
                <EditProductDialog
                    name=Signal::derive(move || {
                        state.with(|s| s.editing.as_ref().map(|p| p.name.clone()).unwrap_or_default())
                    })
                    on_input=Callback::new(move |name: String| state.update(|s| s.set_edit_name(name)))
                    on_save=on_save_edit
                    on_cancel=Callback::new(move |()| state.update(UserViewState::cancel_edit))
                />
            </Show>

            {move || {
                research
                    .get()
                    .map(|summary| {
                        view! {
                            <ResearchDialog
                                summary=summary
                                selection=selection
                                temp_key=temp_key
                                ad_text=ad_text
                                generating=generating
                                on_generate=on_generate
                                on_close=on_close_research
                            />
                        }
                    })
            }}
        </div>
    }
}
