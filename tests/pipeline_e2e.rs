// tests/pipeline_e2e.rs
//
// Whole query path against canned sources: input → Loading → final page.

mod common;

use common::*;
use neis_meal::{
    date::QueryDate,
    error::MealError,
    pipeline,
    progress::NullProgress,
    render::{self, Region, RenderState, Section},
};

fn date(s: &str) -> QueryDate {
    QueryDate::resolve(s).unwrap()
}

#[test]
fn date_without_menu_shows_no_data_page() {
    let mut rec = Recorder::default();

    // Loading first
    let loading = render::render(&RenderState::Loading);
    assert!(loading.loading.visible);
    assert!(!loading.details_visible);

    let state = pipeline::run("2024-03-09", &Fixed::body(NO_DATA), &mut rec);
    assert_eq!(rec.events, vec!["loading 2024-03-09", "done no_data"]);

    let page = render::render(&state);
    assert!(!page.loading.visible);
    assert!(!page.error.visible);
    assert!(page.details_visible);
    assert_eq!(page.date_display, Region::shown("2024년 3월 9일 (토)"));
    assert_eq!(page.status_heading.text, "해당 날짜의 급식 정보가 없습니다.");
    assert_eq!(page.menu, Section::default());
    assert_eq!(page.nutrition, Section::default());
}

#[test]
fn transport_failure_shows_error_and_hides_details() {
    let mut rec = Recorder::default();
    let src = Fixed(Err(MealError::Transport("error sending request: dns error".into())));

    let state = pipeline::run("2024-03-04", &src, &mut rec);
    assert_eq!(rec.events, vec!["loading 2024-03-04", "done error"]);

    let page = render::render(&state);
    assert!(!page.loading.visible);
    assert!(!page.details_visible);
    assert!(page.error.visible);
    assert!(page.error.text.starts_with("급식 정보를 가져오는 중 오류가 발생했습니다: "));
    assert!(page.error.text.contains("dns error"));
}

#[test]
fn published_menu_renders_items_and_nutrition() {
    let state = pipeline::run("2024-03-04", &Fixed::body(FOUND), &mut NullProgress);
    let page = render::render(&state);

    assert_eq!(page.date_display.text, "2024년 3월 4일 (월) 급식 정보");
    assert!(!page.status_heading.visible);
    assert_eq!(page.menu.lines, vec!["쌀밥", "쇠고기미역국", "닭갈비(5.6.13.15)", "배추김치", "우유"]);
    assert_eq!(
        page.nutrition.lines,
        vec!["열량: 812.4 Kcal", "탄수화물(g) : 112.3", "단백질(g) : 38.1", "지방(g) : 21.7"]
    );
}

#[test]
fn no_data_code_beats_everything_else() {
    let body = r#"{"RESULT": {"CODE": "INFO-200", "MESSAGE": "x"},
                   "mealServiceDietInfo": [{"head": []}, {"row": [{"DDISH_NM": "쌀밥"}]}]}"#;
    let state = pipeline::run("2024-03-04", &Fixed::body(body), &mut NullProgress);
    assert_eq!(state, RenderState::NoData { date: date("2024-03-04") });
}

#[test]
fn missing_dish_names_is_no_data() {
    for body in [
        r#"{"mealServiceDietInfo": [{"head": []}, {"row": [{"DDISH_NM": ""}]}]}"#,
        r#"{"mealServiceDietInfo": [{"head": []}, {"row": [{"CAL_INFO": "500 Kcal"}]}]}"#,
    ] {
        let state = pipeline::run("2024-03-04", &Fixed::body(body), &mut NullProgress);
        assert_eq!(state, RenderState::NoData { date: date("2024-03-04") }, "body: {body}");
    }
}

#[test]
fn non_string_fields_never_reach_the_page_as_false() {
    let state = pipeline::run("2024-03-04", &Fixed::body(FALSE_FIELDS), &mut NullProgress);
    let page = render::render(&state);

    assert_eq!(page.menu.lines, vec!["카레라이스", "깍두기"]);
    assert_eq!(page.nutrition.heading.as_deref(), Some("영양 정보"));
    assert!(page.nutrition.lines.is_empty());
    assert!(!page.text_content().iter().any(|t| t.trim() == "false"));
}

#[test]
fn empty_date_is_validation_error_without_loading() {
    let mut rec = Recorder::default();
    let state = pipeline::run("", &Fixed::body(FOUND), &mut rec);
    assert_eq!(rec.events, vec!["done error"]);
    assert_eq!(state, RenderState::Error { message: "날짜를 선택해주세요.".into() });
}

#[test]
fn display_date_follows_selection_not_response() {
    // Response is for 2024-03-04, but the user asked for the 5th.
    let state = pipeline::run("2024-03-05", &Fixed::body(FOUND), &mut NullProgress);
    let page = render::render(&state);
    assert_eq!(page.date_display.text, "2024년 3월 5일 (화) 급식 정보");
}
