use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use mail_triage_ui::{render_page, PageProps};
use triage_core::{pipeline, AnalysisResult, SessionHistory, Submission};

use crate::{
    app::AppState,
    services::{read_submission, session_service, ServiceError},
    types::IndexForm,
};

pub async fn index(jar: SignedCookieJar) -> Html<String> {
    let history = session_service::load_history(&jar);
    Html(page(None, &history).await)
}

pub async fn analyze_submission(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    request: Request,
) -> (SignedCookieJar, Html<String>) {
    let history = session_service::load_history(&jar);

    // A body we can't read is handled like an empty form.
    let submission = match read_request(&state, request).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable submission");
            Submission::default()
        }
    };

    let output = pipeline::run(state.generator.as_ref(), submission, history).await;
    let jar = session_service::save_history(jar, &output.history, state.config.secure_cookies);

    (jar, Html(page(output.result, &output.history).await))
}

pub async fn clear_history(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session_service::clear_history(jar), Redirect::to("/"))
}

async fn read_request(state: &AppState, request: Request) -> Result<Submission, ServiceError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| ServiceError::InvalidInput(e.body_text()))?;
        read_submission(multipart).await
    } else {
        let Form(form) = Form::<IndexForm>::from_request(request, state)
            .await
            .map_err(|e| ServiceError::InvalidInput(e.body_text()))?;
        Ok(form.into())
    }
}

async fn page(result: Option<AnalysisResult>, history: &SessionHistory) -> String {
    render_page(PageProps {
        result,
        history: history.current().to_vec(),
    })
    .await
}
