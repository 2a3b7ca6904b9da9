// src/meal/interpret.rs
use super::{
    record::MealDetails,
    response::{DecodeError, MealResponse},
};

/// Why a date ended up with nothing to show.
#[derive(Debug)]
pub enum NoDataReason {
    ResultCode(String),
    MissingContainer,
    NoRows,
    NoDishNames,
    Malformed(DecodeError),
}

#[derive(Debug)]
pub enum Interpretation {
    NoData(NoDataReason),
    Found(MealDetails),
}

/// Classify a raw body. Never fails: anything unreadable is "no data".
///
/// Precedence: no-data result code, missing container, empty rows or a first
/// record without dish names, then found.
pub fn interpret(body: &str) -> Interpretation {
    let resp = match MealResponse::parse(body) {
        Ok(resp) => resp,
        Err(e) => return Interpretation::NoData(NoDataReason::Malformed(e)),
    };

    match &resp {
        MealResponse::NoDataCode(head) => {
            Interpretation::NoData(NoDataReason::ResultCode(head.code.clone()))
        }
        MealResponse::MissingContainer => Interpretation::NoData(NoDataReason::MissingContainer),
        MealResponse::Found(_) => match resp.first_record() {
            None => Interpretation::NoData(NoDataReason::NoRows),
            Some(rec) => match rec.details() {
                Some(details) => Interpretation::Found(details),
                None => Interpretation::NoData(NoDataReason::NoDishNames),
            },
        },
    }
}

impl std::fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoDataReason::ResultCode(code) => write!(f, "result code {code}"),
            NoDataReason::MissingContainer => f.write_str("no meal container"),
            NoDataReason::NoRows => f.write_str("empty row list"),
            NoDataReason::NoDishNames => f.write_str("first record has no dish names"),
            NoDataReason::Malformed(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(body: &str) -> MealDetails {
        match interpret(body) {
            Interpretation::Found(d) => d,
            Interpretation::NoData(r) => panic!("expected meal, got no data ({r})"),
        }
    }

    fn reason(body: &str) -> NoDataReason {
        match interpret(body) {
            Interpretation::NoData(r) => r,
            Interpretation::Found(d) => panic!("expected no data, got {d:?}"),
        }
    }

    #[test]
    fn found_uses_first_record_only() {
        let d = found(
            r#"{"mealServiceDietInfo": [{"head": []}, {"row": [
                {"DDISH_NM": "쌀밥<br/>김치(1.2)<br/>우유(4)", "CAL_INFO": "650 Kcal",
                 "NTR_INFO": "탄수화물(g) : 95.1<br/>단백질(g) : 30.2"},
                {"DDISH_NM": "저녁밥"}
            ]}]}"#,
        );
        assert_eq!(d.menu, vec!["쌀밥", "김치", "우유"]);
        assert_eq!(d.calories.as_deref(), Some("650 Kcal"));
        assert_eq!(d.nutrition, vec!["탄수화물(g) : 95.1", "단백질(g) : 30.2"]);
    }

    #[test]
    fn precedence_of_no_data_reasons() {
        assert!(matches!(
            reason(r#"{"RESULT": {"CODE": "INFO-200"}, "mealServiceDietInfo": [{}, {"row": [{"DDISH_NM": "밥"}]}]}"#),
            NoDataReason::ResultCode(code) if code == "INFO-200"
        ));
        assert!(matches!(reason(r#"{"foo": 1}"#), NoDataReason::MissingContainer));
        assert!(matches!(reason(r#"{"mealServiceDietInfo": [{}, {"row": []}]}"#), NoDataReason::NoRows));
        assert!(matches!(
            reason(r#"{"mealServiceDietInfo": [{}, {"row": [{"DDISH_NM": ""}]}]}"#),
            NoDataReason::NoDishNames
        ));
        assert!(matches!(reason("not json"), NoDataReason::Malformed(_)));
    }
}
