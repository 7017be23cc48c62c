//! Research results dialog: rating gauges, feature picks, ad generation.

use leptos::prelude::*;

use crate::components::rating_dial::RatingDial;
use crate::state::advert::FeatureSelection;
use crate::state::api_key::ApiKeyHolder;
use crate::state::research::ResearchSummary;

/// Dialog for one research report.
///
/// The temporary key field only shows while the API key store is empty.
#[component]
pub fn ResearchDialog(
    summary: ResearchSummary,
    selection: RwSignal<FeatureSelection>,
    temp_key: RwSignal<String>,
    #[prop(into)] ad_text: Signal<Option<String>>,
    #[prop(into)] generating: Signal<bool>,
    on_generate: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let keys = expect_context::<RwSignal<ApiKeyHolder>>();
    let needs_key = move || keys.with(ApiKeyHolder::is_empty);

    let overall = summary.overall;
    let overall_label = summary.overall_label();
    let title = format!("Research Results for {}", summary.product_name);

    let dials = summary
        .entries
        .iter()
        .map(|entry| view! { <RatingDial label=entry.name.clone() value=entry.value fill=entry.fill.clone()/> })
        .collect_view();

    let checkboxes = summary
        .feature_names()
        .into_iter()
        .map(|feature| {
            let checked = {
                let feature = feature.clone();
                move || selection.with(|s| s.is_selected(&feature))
            };
            let toggle = {
                let feature = feature.clone();
                move |_| selection.update(|s| s.toggle(&feature))
            };
            view! {
                <label class="research-dialog__feature">
                    <input type="checkbox" prop:checked=checked on:change=toggle/>
                    {feature}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <div class="research-dialog__overall">
                    <span class="research-dialog__score">{overall_label}</span>
                    <RatingDial label="Overall" value=overall fill="hsl(210, 70%, 45%)"/>
                </div>
                <div class="research-dialog__dials">{dials}</div>

                <h3>"Select features for advertisement:"</h3>
                <div class="research-dialog__features">{checkboxes}</div>

                <Show when=needs_key>
                    <label class="dialog__label">
                        "OpenAI API Key"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || temp_key.get()
                            on:input=move |ev| temp_key.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <button
                    class="btn btn--primary"
                    prop:disabled=move || generating.get()
                    on:click=move |_| on_generate.run(())
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Advertisement" }}
                </button>

                {move || {
                    ad_text
                        .get()
                        .map(|text| {
                            view! {
                                <section class="research-dialog__ad">
                                    <h3>"Generated Advertisement:"</h3>
                                    <p>{text}</p>
                                </section>
                            }
                        })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
