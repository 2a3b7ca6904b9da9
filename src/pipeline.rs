// src/pipeline.rs
//! Input → request → interpretation → [`RenderState`].
//!
//! Two entry points share the same steps:
//! - [`run`] does everything on the calling thread (CLI, tests);
//! - [`resolve`] + [`retrieve`] are split so the controller can enter
//!   Loading synchronously and do the request on a worker.

use crate::{
    config::consts::MSG_FETCH_FAILED,
    core::MealSource,
    date::QueryDate,
    error::MealError,
    meal::{Interpretation, NoDataReason, interpret},
    progress::Progress,
    render::RenderState,
};

/// Validate the date field. Empty → error, and no request is sent.
pub fn resolve(input: &str) -> Result<QueryDate, MealError> {
    QueryDate::resolve(input).inspect_err(|e| loge!("Query: Rejected input {:?}: {}", input, e))
}

/// The Error state for a failed query.
pub fn error_state(err: &MealError) -> RenderState {
    let message = match err {
        MealError::EmptyDate => err.to_string(),
        _ => format!("{MSG_FETCH_FAILED}: {err}"),
    };
    RenderState::Error { message }
}

/// One request for `date`, classified. Transport failures become Error;
/// every response-shape problem becomes NoData.
pub fn retrieve(date: &QueryDate, source: &dyn MealSource) -> RenderState {
    let body = match source.fetch(&date.api()) {
        Ok(body) => body,
        Err(e) => {
            loge!("Query: Fetch failed date={}: {}", date, e);
            return error_state(&e);
        }
    };

    match interpret(&body) {
        Interpretation::Found(meal) => {
            logf!("Query: OK date={} items={} nutrition={}", date, meal.menu.len(), meal.nutrition.len());
            RenderState::MealFound { date: date.clone(), meal }
        }
        Interpretation::NoData(reason @ NoDataReason::Malformed(_)) => {
            logw!("Query: Unreadable response date={} ({}), showing no meal", date, reason);
            RenderState::NoData { date: date.clone() }
        }
        Interpretation::NoData(reason) => {
            logf!("Query: No meal date={} ({})", date, reason);
            RenderState::NoData { date: date.clone() }
        }
    }
}

/// Whole query on the current thread.
pub fn run(input: &str, source: &dyn MealSource, progress: &mut dyn Progress) -> RenderState {
    let state = match resolve(input) {
        Ok(date) => {
            logf!("Query: Begin date={}", date);
            progress.begin(&date);
            retrieve(&date, source)
        }
        Err(e) => error_state(&e),
    };
    progress.finish(&state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use std::sync::Mutex;

    /// Canned answer; records which API dates were asked for.
    struct Canned {
        answer: Result<String, MealError>,
        asked: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(answer: Result<&str, MealError>) -> Self {
            Self { answer: answer.map(String::from), asked: Mutex::new(Vec::new()) }
        }
    }

    impl MealSource for Canned {
        fn fetch(&self, api_date: &str) -> Result<String, MealError> {
            self.asked.lock().unwrap().push(s!(api_date));
            self.answer.clone()
        }
    }

    #[test]
    fn empty_date_sends_nothing() {
        let src = Canned::new(Ok("{}"));
        let st = run("", &src, &mut NullProgress);
        assert_eq!(st, RenderState::Error { message: s!("날짜를 선택해주세요.") });
        assert!(src.asked.lock().unwrap().is_empty());
    }

    #[test]
    fn request_uses_api_date() {
        let src = Canned::new(Ok(r#"{"RESULT": {"CODE": "INFO-200"}}"#));
        let st = run("2024-03-04", &src, &mut NullProgress);
        assert_eq!(*src.asked.lock().unwrap(), vec!["20240304"]);
        assert_eq!(st.kind(), "no_data");
    }

    #[test]
    fn transport_error_message_embeds_detail() {
        let src = Canned::new(Err(MealError::Status(500)));
        let st = run("2024-03-04", &src, &mut NullProgress);
        assert_eq!(
            st,
            RenderState::Error {
                message: s!(
                    "급식 정보를 가져오는 중 오류가 발생했습니다: 네트워크 응답이 올바르지 않습니다. (HTTP 500)"
                )
            }
        );
    }

    #[test]
    fn unparseable_body_is_no_data() {
        let src = Canned::new(Ok("<html>maintenance</html>"));
        let st = run("2024-03-04", &src, &mut NullProgress);
        assert_eq!(st, RenderState::NoData { date: QueryDate::resolve("2024-03-04").unwrap() });
    }
}
