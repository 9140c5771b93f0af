//! 애플리케이션 컨텍스트
//!
//! 시작 시 저장소 구현과 설정값으로 모든 서비스를 한 번 조립하고,
//! `web::Data<AppContext>`로 등록해 핸들러와 미들웨어에 공유합니다.
//!
//! ```text
//! UserStore ──┬─> UserService ── PasswordService
//!             ├─> AuthGate ───── TokenService, Clock
//!             └─> PostService ── PostStore (posts), AdoptedStore (adotados)
//! ```

use std::sync::Arc;

use crate::{
    repositories::{AdoptedStore, PostStore, UserStore},
    services::{
        auth::{AuthGate, PasswordService, TokenService},
        posts::PostService,
        users::UserService,
    },
    utils::Clock,
};

/// 요청 처리에 필요한 서비스 묶음
#[derive(Clone)]
pub struct AppContext {
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
    pub token_service: Arc<TokenService>,
    pub auth_gate: Arc<AuthGate>,
    pub clock: Arc<dyn Clock>,
}

/// 서비스 조립에 필요한 저장소와 설정
pub struct AppDependencies {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub adopted: Arc<dyn AdoptedStore>,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn new(deps: AppDependencies) -> Self {
        let AppDependencies {
            users,
            posts,
            adopted,
            jwt_secret,
            bcrypt_cost,
            clock,
        } = deps;

        let token_service = Arc::new(TokenService::new(&jwt_secret));
        let password_service = Arc::new(PasswordService::new(bcrypt_cost));

        Self {
            user_service: Arc::new(UserService::new(users.clone(), password_service)),
            post_service: Arc::new(PostService::new(posts, adopted, users.clone())),
            auth_gate: Arc::new(AuthGate::new(token_service.clone(), users, clock.clone())),
            token_service,
            clock,
        }
    }
}
