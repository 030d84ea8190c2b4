use statusgate_server::config::AppConfig;
use statusgate_server::routes::app_router;
use statusgate_server::state::AppState;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestApp {
    pub base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = AppConfig {
            auth_token: "auth".to_string(),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}:{}", addr.ip(), addr.port());

        let state = AppState::new(config);
        let app = app_router(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = server.await {
                eprintln!("server error: {err}");
            }
        });

        Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
