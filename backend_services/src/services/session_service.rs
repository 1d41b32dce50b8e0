use anyhow::Context;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use sha2::{Digest, Sha512};
use std::io::{Read, Write};
use triage_core::SessionHistory;

/// Cookie holding the serialized history of the session.
pub const HISTORY_COOKIE: &str = "history";

/// Browsers reject a `Set-Cookie` past 4096 bytes and keep the previous
/// value. The payload budget leaves room for the signature, the name and
/// the attributes.
const MAX_VALUE_BYTES: usize = 3800;

/// Derive the cookie signing key from the configured secret.
///
/// `Key` wants 64 bytes of material; SHA-512 stretches secrets of any length.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// History of the requesting session. Missing, forged or unreadable cookies
/// all load as an empty history.
pub fn load_history(jar: &SignedCookieJar) -> SessionHistory {
    let Some(cookie) = jar.get(HISTORY_COOKIE) else {
        return SessionHistory::new();
    };

    match decode_history(cookie.value()) {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "discarding unreadable session history");
            SessionHistory::new()
        }
    }
}

/// Store `history` in the session cookie; an empty history removes it.
///
/// When the encoded history doesn't fit in a cookie, the oldest entries are
/// left out until it does.
pub fn save_history(jar: SignedCookieJar, history: &SessionHistory, secure: bool) -> SignedCookieJar {
    let entries = history.current();

    for kept in (1..=entries.len()).rev() {
        let stored = SessionHistory::from_entries(entries[..kept].to_vec());
        let value = match encode_history(&stored) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "could not serialize session history");
                return jar;
            }
        };
        if value.len() > MAX_VALUE_BYTES {
            continue;
        }
        if kept < entries.len() {
            tracing::warn!(kept, dropped = entries.len() - kept, "session history trimmed to fit cookie");
        }

        return jar.add(
            Cookie::build((HISTORY_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(secure),
        );
    }

    if !entries.is_empty() {
        tracing::warn!("latest result alone is too large for the session cookie, history not stored");
    }
    clear_history(jar)
}

pub fn clear_history(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(HISTORY_COOKIE).path("/"))
}

fn encode_history(history: &SessionHistory) -> anyhow::Result<String> {
    let json = serde_json::to_vec(history).context("history is not serializable")?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json).context("could not compress history")?;
    let compressed = encoder.finish().context("could not compress history")?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

fn decode_history(value: &str) -> anyhow::Result<SessionHistory> {
    let compressed = URL_SAFE_NO_PAD
        .decode(value)
        .context("history cookie is not base64")?;
    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .context("history cookie is not zlib data")?;
    serde_json::from_slice(&json).context("history cookie is not a result list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, HeaderMap, HeaderValue},
        response::IntoResponse,
    };
    use triage_core::{AnalysisResult, Classification, Sentiment, Urgency};

    fn history_of(summaries: &[&str]) -> SessionHistory {
        let mut history = SessionHistory::new();
        for summary in summaries.iter().rev() {
            history.record(AnalysisResult {
                classification: Classification::Productive,
                sentiment: Sentiment::Happy,
                urgency: Urgency::Medium,
                key_data: vec!["R$ 10,00; due 05/10".to_string()],
                summary: summary.to_string(),
                suggested_reply: "Obrigado!".to_string(),
                original_text: "Olá, \"quoted\" text".to_string(),
            });
        }
        history
    }

    fn result_with(summary: &str, original_text: String, suggested_reply: String) -> AnalysisResult {
        AnalysisResult {
            classification: Classification::Productive,
            sentiment: Sentiment::Irritated,
            urgency: Urgency::High,
            key_data: vec!["Invoice #4471".to_string(), "R$ 1.250,00 charged twice".to_string()],
            summary: summary.to_string(),
            suggested_reply,
            original_text,
        }
    }

    /// `text` repeated up to exactly `len` characters.
    fn repeated(text: &str, len: usize) -> String {
        text.chars().cycle().take(len).collect()
    }

    /// Lowercase letters from a fixed-seed LCG; zlib can't shrink these much.
    fn noise(seed: u64, len: usize) -> String {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (b'a' + ((state >> 33) % 26) as u8) as char
            })
            .collect()
    }

    /// The full `Set-Cookie` header carrying a history value.
    fn history_set_cookie(jar: SignedCookieJar) -> Option<String> {
        jar.into_response()
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("history=") && !value.starts_with("history=;"))
            .map(str::to_string)
    }

    /// Replay the `Set-Cookie` headers of `jar` as a request `Cookie` header.
    fn request_headers(jar: SignedCookieJar) -> HeaderMap {
        let response = jar.into_response();
        let pairs: Vec<String> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next().map(str::to_string))
            .collect();

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&pairs.join("; ")).unwrap());
        headers
    }

    #[test]
    fn test_short_secrets_yield_a_key() {
        let a = signing_key("x");
        let b = signing_key("x");
        assert_eq!(a.master(), b.master());
        assert_ne!(signing_key("y").master(), a.master());
    }

    #[test]
    fn test_history_round_trips_through_signed_cookie() {
        let key = signing_key("test-secret");
        let history = history_of(&["newest", "older"]);
        let jar = save_history(SignedCookieJar::new(key.clone()), &history, false);

        let incoming = SignedCookieJar::from_headers(&request_headers(jar), key);
        assert_eq!(load_history(&incoming), history);
    }

    #[test]
    fn test_cookie_signed_with_other_key_is_ignored() {
        let jar = save_history(
            SignedCookieJar::new(signing_key("attacker")),
            &history_of(&["forged"]),
            false,
        );
        let incoming = SignedCookieJar::from_headers(&request_headers(jar), signing_key("server"));
        assert!(load_history(&incoming).is_empty());
    }

    #[test]
    fn test_unsigned_or_garbage_cookie_loads_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("history=not-a-signed-value"));
        let jar = SignedCookieJar::from_headers(&headers, signing_key("server"));
        assert!(load_history(&jar).is_empty());

        let jar = SignedCookieJar::new(signing_key("server"))
            .add(Cookie::new(HISTORY_COOKIE, "%%% not base64 %%%"));
        assert!(load_history(&jar).is_empty());
    }

    #[test]
    fn test_saving_empty_history_removes_cookie() {
        let key = signing_key("test-secret");
        let jar = save_history(SignedCookieJar::new(key.clone()), &history_of(&["a"]), false);
        let jar = save_history(jar, &SessionHistory::new(), false);
        assert!(jar.get(HISTORY_COOKIE).is_none());
    }

    #[test]
    fn test_three_realistic_results_fit_in_one_cookie() {
        let key = signing_key("test-secret");
        let mut history = SessionHistory::new();
        for (i, summary) in ["first", "second", "third"].iter().enumerate() {
            let original = repeated(
                &format!(
                    "Hello team, I was charged twice for invoice #44{} this month and need a refund. ",
                    i
                ),
                800,
            );
            let reply = repeated("We are sorry for the duplicate charge and will refund it. ", 300);
            history.record(result_with(summary, original, reply));
        }

        let jar = save_history(SignedCookieJar::new(key.clone()), &history, true);
        let set_cookie = history_set_cookie(jar.clone()).expect("history cookie set");
        assert!(set_cookie.len() <= 4096, "Set-Cookie is {} bytes", set_cookie.len());

        let incoming = SignedCookieJar::from_headers(&request_headers(jar), key);
        assert_eq!(load_history(&incoming), history);
    }

    #[test]
    fn test_oversized_history_drops_oldest_entries() {
        let key = signing_key("test-secret");
        let mut history = SessionHistory::new();
        for (seed, summary) in [(1, "oldest"), (2, "middle"), (3, "newest")] {
            history.record(result_with(summary, noise(seed, 2000), "Thanks.".to_string()));
        }

        let jar = save_history(SignedCookieJar::new(key.clone()), &history, false);
        let set_cookie = history_set_cookie(jar.clone()).expect("history cookie set");
        assert!(set_cookie.len() <= 4096, "Set-Cookie is {} bytes", set_cookie.len());

        let incoming = SignedCookieJar::from_headers(&request_headers(jar), key);
        let loaded = load_history(&incoming);
        assert!(!loaded.is_empty() && loaded.len() < 3);
        assert_eq!(loaded.current(), &history.current()[..loaded.len()]);
        assert_eq!(loaded.current()[0].summary, "newest");
    }

    #[test]
    fn test_single_result_too_large_stores_nothing() {
        let history = SessionHistory::from_entries(vec![result_with(
            "huge",
            noise(7, 20_000),
            "Thanks.".to_string(),
        )]);
        let jar = save_history(SignedCookieJar::new(signing_key("test-secret")), &history, false);
        assert!(jar.get(HISTORY_COOKIE).is_none());
        assert!(history_set_cookie(jar).is_none());
    }
}
