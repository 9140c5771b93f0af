//! 인증 게이트 미들웨어
//!
//! 보호가 필요한 리소스에 `.wrap(AuthMiddleware)`로 명시적으로 적용합니다.
//! 통과한 요청에는 `AuthenticatedUser`가 Request Extensions에 저장되어
//! 핸들러에서 extractor로 꺼낼 수 있습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 게이트 미들웨어
///
/// 실패 시 다음 서비스를 호출하지 않고 `AppError` 응답(401 또는 500)을 반환합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthMiddleware;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
