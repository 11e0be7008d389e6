use catalog::app::catalog_router;
use catalog::config::ServerConfig;
use catalog::prelude::*;
use catalog::product::{InMemoryProductRepository, ProductModule, ProductPayload, ProductRepository};
use catalog_client::{CatalogApi, CatalogView, ClientError, HttpCatalogApi, Notifier};
use std::net::SocketAddr;
use std::sync::Mutex;

#[derive(Default)]
struct Alerts(Mutex<Vec<String>>);

impl Notifier for Alerts {
    fn notify(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

async fn spawn_service() -> SocketAddr {
    let mut container = ContainerBuilder::new()
        .register(InMemoryProductRepository::new())
        .bind::<dyn ProductRepository, InMemoryProductRepository, _>(|r| {
            r as Arc<dyn ProductRepository>
        })
        .build();
    ProductModule::register(&mut container).unwrap();
    let router = catalog_router(AppState::new(Arc::new(container)), &ServerConfig::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn api(addr: SocketAddr) -> HttpCatalogApi {
    HttpCatalogApi::new(format!("http://{}/api/products", addr))
}

#[tokio::test]
async fn api_covers_all_operations() {
    let api = api(spawn_service().await);

    assert!(api.list().await.unwrap().is_empty());

    let laptop = api.create(&ProductPayload::new("Laptop", 1500.0)).await.unwrap();
    assert_eq!(laptop.id, 1);
    assert_eq!(api.get(1).await.unwrap(), laptop);

    let phone = api.update(1, &ProductPayload::new("Phone", 800.0)).await.unwrap();
    assert_eq!((phone.id, phone.name.as_str(), phone.price), (1, "Phone", 800.0));

    api.delete(1).await.unwrap();
    assert!(matches!(api.get(1).await, Err(ClientError::NotFound(_))));
    assert!(matches!(api.delete(1).await, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn service_validation_surfaces_as_bad_request() {
    let api = api(spawn_service().await);
    let result = api.create(&ProductPayload::new("   ", 10.0)).await;
    assert!(matches!(result, Err(ClientError::BadRequest(_))));
}

#[tokio::test]
async fn view_drives_the_service() {
    let addr = spawn_service().await;
    let alerts = Arc::new(Alerts::default());
    let mut view = CatalogView::new(api(addr), Arc::clone(&alerts));

    view.load().await.unwrap();
    assert!(view.products().is_empty());

    view.set_name("Laptop");
    view.set_price("1500");
    view.submit().await.unwrap();
    view.set_name("Phone");
    view.set_price("800");
    view.submit().await.unwrap();
    assert_eq!(view.products().len(), 2);

    view.edit(2).unwrap();
    view.set_price("750");
    view.submit().await.unwrap();
    assert_eq!(view.products()[1].price, 750.0);

    view.delete(1).await.unwrap();
    assert_eq!(
        view.products().iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Phone"]
    );
    assert!(alerts.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_service_notifies_load_failure() {
    let alerts = Arc::new(Alerts::default());
    let mut view = CatalogView::new(
        HttpCatalogApi::new("http://127.0.0.1:1/api/products"),
        Arc::clone(&alerts),
    );

    assert!(view.load().await.is_err());
    assert_eq!(
        *alerts.0.lock().unwrap(),
        vec!["Failed to load products. Is your backend running?"]
    );
}
