//! User Entity Implementation
//!
//! `users` 컬렉션의 문서와 1:1로 대응되는 사용자 엔티티입니다.
//! 생성 이후 이 서비스에서 수정되거나 삭제되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 문서 키는 기존 데이터와 호환되도록 `username`, `password`, `phoneNumber`, `isAdmin`을 사용합니다.
/// `password` 키에는 평문이 아닌 bcrypt 해시(알고리즘, cost, 솔트, 다이제스트 포함)가 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 유일 키. 대소문자를 구분합니다.
    pub username: String,

    #[serde(rename = "password")]
    pub password_hash: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    /// 관리자(상위 권한) 여부
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl User {
    /// 해시된 비밀번호로 새 사용자 엔티티를 만듭니다. ID는 저장소가 할당합니다.
    pub fn new(username: String, password_hash: String, phone_number: String, is_admin: bool) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            phone_number,
            is_admin,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_document_uses_legacy_keys() {
        let user = User::new("alice".into(), "$2b$04$hash".into(), "5551234".into(), false);
        let document = to_document(&user).unwrap();

        assert_eq!(document.get_str("username").unwrap(), "alice");
        assert_eq!(document.get_str("password").unwrap(), "$2b$04$hash");
        assert_eq!(document.get_str("phoneNumber").unwrap(), "5551234");
        assert!(!document.get_bool("isAdmin").unwrap());
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_missing_admin_flag_defaults_to_false() {
        let document = doc! {
            "username": "bob",
            "password": "$2b$04$hash",
            "phoneNumber": "555",
        };

        let user: User = from_document(document).unwrap();
        assert!(!user.is_admin);
        assert!(user.id_string().is_none());
    }
}
