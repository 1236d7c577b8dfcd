//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use bloom_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::image::ImageLoader;
use crate::message::Message;

/// Execute an action by spawning background tasks
pub fn handle_action<L>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, loader: Arc<L>)
where
    L: ImageLoader + Sync + 'static,
{
    match action {
        UpdateAction::LoadImages { urls } => {
            for url in urls {
                spawn_image_load(url, msg_tx.clone(), loader.clone());
            }
        }
    }
}

/// Load one image and report the outcome as a message
fn spawn_image_load<L>(url: String, msg_tx: mpsc::Sender<Message>, loader: Arc<L>)
where
    L: ImageLoader + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match loader.load(&url).await {
            Ok(info) => Message::ImageLoaded { url, info },
            Err(e) => Message::ImageFailed {
                url,
                error: e.to_string(),
            },
        };

        if let Err(e) = report(&msg_tx, msg).await {
            debug!("Image result dropped: {}", e);
        }
    });
}

/// Hand a finished load back to the event loop
async fn report(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx.send(msg).await.map_err(|_| Error::ChannelClosed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::OfflineImageLoader;
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_images_reports_each_url() {
        let (tx, mut rx) = mpsc::channel(8);
        let loader = Arc::new(OfflineImageLoader::new());

        handle_action(
            UpdateAction::LoadImages {
                urls: vec![
                    "https://images.pexels.com/photos/1/pexels-photo-1.jpeg".to_string(),
                    "nonsense".to_string(),
                ],
            },
            tx,
            loader,
        );

        let mut loaded = 0;
        let mut failed = 0;
        for _ in 0..2 {
            let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .unwrap()
                .unwrap();
            match msg {
                Message::ImageLoaded { info, .. } => {
                    assert_eq!(info.label, "pexels #1");
                    loaded += 1;
                }
                Message::ImageFailed { url, .. } => {
                    assert_eq!(url, "nonsense");
                    failed += 1;
                }
                other => panic!("unexpected message {other:?}"),
            }
        }
        assert_eq!((loaded, failed), (1, 1));
    }

    #[tokio::test]
    async fn test_report_after_loop_gone_is_channel_closed() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let err = report(&tx, Message::Tick).await.unwrap_err();
        assert!(matches!(err, Error::ChannelClosed));
        assert!(err.is_fatal());
    }
}
