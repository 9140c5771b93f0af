//! bcrypt 비밀번호 해싱 서비스

use log::debug;

use crate::errors::AppError;

/// 비밀번호 해싱/검증 서비스
///
/// 해시 출력에 알고리즘, cost, 솔트, 다이제스트가 함께 인코딩되므로 검증에 별도 조회가 필요 없습니다.
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// `cost`는 환경별 `PasswordConfig::bcrypt_cost()` 값을 사용합니다.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 새 랜덤 솔트로 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 내부 오류 (잘못된 cost 등)
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }

    /// 저장된 해시에 포함된 솔트와 cost로 다시 계산해 비교합니다.
    ///
    /// 형식이 잘못된 해시는 에러 대신 `false`를 반환합니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash).unwrap_or_else(|e| {
            debug!("저장된 해시 형식 오류: {}", e);
            false
        });
        debug!("Password verification took: {:?}", verify_start.elapsed());

        is_valid
    }
}
