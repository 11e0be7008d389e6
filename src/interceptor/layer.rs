use crate::exception::{ExceptionFilter, HttpExceptionFilter};
use crate::interceptor::{Interceptor, InterceptorResult, Next, NextFuture};
use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer running a chain of interceptors around the router
///
/// Interceptors run in the order given: the first one sees the request first
/// and the response last. Errors from the chain are rendered by the exception
/// filter, so the wrapped service stays infallible as axum requires.
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
            filter: Arc::new(HttpExceptionFilter),
        }
    }

    pub fn with_filter(mut self, filter: Arc<dyn ExceptionFilter>) -> Self {
        self.filter = filter;
        self
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
            filter: Arc::clone(&self.filter),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
    filter: Arc<dyn ExceptionFilter>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);
        let filter = Arc::clone(&self.filter);

        // Keep the service that poll_ready was driven on; leave a fresh clone behind.
        let clone = self.inner.clone();
        let inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req: Request<Body>| -> NextFuture {
                Box::pin(async move {
                    let mut inner = inner;
                    let response: InterceptorResult = match inner.call(req).await {
                        Ok(response) => Ok(response),
                        Err(never) => match never {},
                    };
                    response
                })
            });

            // Wrap from the back so interceptors[0] runs outermost.
            for interceptor in interceptors.iter().rev() {
                let interceptor = Arc::clone(interceptor);
                let next = chain;
                chain = Next::new(move |req: Request<Body>| -> NextFuture {
                    Box::pin(async move { interceptor.intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(error) => Ok(filter.catch(error)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::interceptor::LoggingInterceptor;
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, routing::get};
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Interceptor for Recorder {
        async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
            self.log.lock().unwrap().push(format!("{} before", self.label));
            let response = next.run(request).await;
            self.log.lock().unwrap().push(format!("{} after", self.label));
            response
        }
    }

    struct RejectAll;

    #[async_trait]
    impl Interceptor for RejectAll {
        async fn intercept(&self, _request: Request<Body>, _next: Next) -> InterceptorResult {
            Err(Box::new(CatalogError::BadRequest("rejected".into())))
        }
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn runs_interceptors_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let layer = InterceptorLayer::new(vec![
            Arc::new(Recorder {
                label: "outer",
                log: Arc::clone(&log),
            }),
            Arc::new(Recorder {
                label: "inner",
                log: Arc::clone(&log),
            }),
        ]);
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app.oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["outer before", "inner before", "inner after", "outer after"]
        );
    }

    #[tokio::test]
    async fn errors_are_rendered_by_the_filter() {
        let layer = InterceptorLayer::new(vec![Arc::new(RejectAll)]);
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app.oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn logging_sets_request_id() {
        let layer = InterceptorLayer::new(vec![Arc::new(LoggingInterceptor)]);
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app.oneshot(request("/")).await.unwrap();
        let id = response
            .headers()
            .get(crate::interceptor::REQUEST_ID_HEADER)
            .unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn custom_filter_renders_errors() {
        struct Teapot;

        impl ExceptionFilter for Teapot {
            fn catch(&self, _error: crate::interceptor::InterceptorError) -> Response {
                axum::response::IntoResponse::into_response(StatusCode::IM_A_TEAPOT)
            }
        }

        let layer = InterceptorLayer::new(vec![Arc::new(RejectAll)]).with_filter(Arc::new(Teapot));
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app.oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
