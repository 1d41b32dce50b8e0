use triage_core::AnalysisResult;
use yew::prelude::*;

use crate::types::Badge;

#[derive(Properties, PartialEq)]
pub struct ResultViewProps {
    pub result: AnalysisResult,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let result = &props.result;
    let classification = Badge::classification(result.classification);
    let sentiment = Badge::sentiment(result.sentiment);
    let urgency = Badge::urgency(result.urgency);

    html! {
        <div id="result" style="display:flex; flex-direction:column; gap:0.8em; border:1px solid #ddd; border-radius:4px; padding:1em; background:#fff;">
            <div style="display:flex; gap:0.5em; align-items:center; flex-wrap:wrap;">
                <span class="classification" style={classification.style()}>{ classification.name }</span>
                <span style={sentiment.style()}>{ format!("Sentiment: {}", sentiment.name) }</span>
                <span style={urgency.style()}>{ format!("Urgency: {}", urgency.name) }</span>
            </div>
            <div>
                <strong style="color:#555;">{ "Summary: " }</strong>
                <span class="summary">{ &result.summary }</span>
            </div>
            { if result.key_data.is_empty() {
                html! {}
            } else {
                html! {
                    <div>
                        <strong style="color:#555;">{ "Key data:" }</strong>
                        <ul class="key-data" style="margin:0.3em 0;">
                            { for result.key_data.iter().map(|item| html! { <li>{ item }</li> }) }
                        </ul>
                    </div>
                }
            }}
            <div style="display:flex; flex-direction:column; gap:0.3em;">
                <strong style="color:#555;">{ "Suggested reply:" }</strong>
                <textarea
                    class="suggested-reply"
                    rows=6
                    style="width:100%; resize:vertical; font-family:inherit; padding:0.5em; box-sizing:border-box; border:1px solid #ccc; border-radius:4px;"
                    readonly=true
                    value={result.suggested_reply.clone()}
                />
            </div>
        </div>
    }
}
