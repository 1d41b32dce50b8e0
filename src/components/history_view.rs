use triage_core::AnalysisResult;
use yew::prelude::*;

use crate::types::Badge;

/// Characters of the original email shown in a history card.
const PREVIEW_CHARS: usize = 120;

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryViewProps {
    pub entries: Vec<AnalysisResult>,
}

#[function_component(HistoryView)]
pub fn history_view(props: &HistoryViewProps) -> Html {
    let entries = &props.entries;

    if entries.is_empty() {
        return html! {
            <div id="history" style="color:#888; font-size:0.9em;">
                { "No analyses yet in this session." }
            </div>
        };
    }

    html! {
        <div id="history" style="display:flex; flex-direction:column; gap:0.6em;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <strong>{ format!("Recent analyses ({})", entries.len()) }</strong>
                <a href="/clear" style="color:#dc3545; font-size:0.9em;">{ "Clear history" }</a>
            </div>
            { for entries.iter().map(|entry| {
                let classification = Badge::classification(entry.classification);
                let urgency = Badge::urgency(entry.urgency);
                html! {
                    <div class="history-entry" style="border:1px solid #ddd; border-radius:4px; padding:0.6em; background:#fff;">
                        <div style="display:flex; gap:0.4em; margin-bottom:0.3em;">
                            <span style={classification.style()}>{ classification.name }</span>
                            <span style={urgency.style()}>{ urgency.name }</span>
                        </div>
                        <div style="font-size:0.9em;">{ &entry.summary }</div>
                        <div style="font-size:0.8em; color:#666; margin-top:0.3em; white-space:pre-wrap;">
                            { preview(&entry.original_text) }
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
