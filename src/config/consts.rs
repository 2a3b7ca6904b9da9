// src/config/consts.rs

// Net config
pub const ENDPOINT: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";
pub const DISTRICT_CODE: &str = "J10"; // 경기도교육청
pub const SCHOOL_CODE: &str = "7541012";
pub const RESPONSE_FORMAT: &str = "json";
pub const USER_AGENT: &str = concat!("neis_meal/", env!("CARGO_PKG_VERSION"));

// Query parameter names
pub const PARAM_DISTRICT: &str = "ATPT_OFCDC_SC_CODE";
pub const PARAM_SCHOOL: &str = "SD_SCHUL_CODE";
pub const PARAM_DATE: &str = "MLSV_YMD";
pub const PARAM_FORMAT: &str = "Type";

// Response shape
pub const CONTAINER_KEY: &str = "mealServiceDietInfo";
pub const NO_DATA_CODE: &str = "INFO-200";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// GUI
pub const WINDOW_TITLE: &str = "급식 정보";
pub const WINDOW_W: u32 = 520;
pub const WINDOW_H: u32 = 640;
pub const CLEANUP_DELAY_MS: u64 = 500;

// Display strings
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
pub const MSG_PICK_DATE: &str = "날짜를 선택해주세요.";
pub const MSG_BAD_RESPONSE: &str = "네트워크 응답이 올바르지 않습니다.";
pub const MSG_FETCH_FAILED: &str = "급식 정보를 가져오는 중 오류가 발생했습니다";
pub const MSG_NO_MEAL: &str = "해당 날짜의 급식 정보가 없습니다.";
pub const MSG_LOADING: &str = "급식 정보를 불러오는 중...";
pub const HEADING_SUFFIX: &str = "급식 정보";
pub const HEADING_MENU: &str = "급식 메뉴";
pub const HEADING_NUTRITION: &str = "영양 정보";
pub const CALORIE_PREFIX: &str = "열량: ";
pub const LABEL_SEARCH: &str = "조회";
