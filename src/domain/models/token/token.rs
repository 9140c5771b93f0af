//! 세션 토큰 클레임
//!
//! 로그인 시 만들어져 서명된 토큰 안에만 존재하며, 서버에 저장되지 않습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `username`: 토큰의 주체
/// - `isAdmin`: 발급 시점의 관리자 여부
/// - `iat`: 발급 시간 (Unix timestamp, 초). 없는 토큰은 0으로 읽습니다
/// - `exp`: 만료 시간 (Unix timestamp, 초). `now >= exp`이면 무효
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}
