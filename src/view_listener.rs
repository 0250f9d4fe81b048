use crate::domain::View;
use crate::render::render;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::watch::Receiver;
use tracing::{instrument, warn};

/// Writes the current view, then every changed view, until the store goes away.
#[instrument(skip_all)]
pub async fn view_listener<W>(mut rx: Receiver<View>, out: &mut W)
where
    W: AsyncWrite + Unpin,
{
    loop {
        let text = format!("{}\n", render(&rx.borrow_and_update()));
        if let Err(e) = write(out, &text).await {
            warn!("⚠️ Unable to render the view: {}", e);
            return;
        }

        if rx.changed().await.is_err() {
            return;
        }
    }
}

async fn write<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use pretty_assertions::assert_eq;
    use tokio::sync::watch;

    #[tokio::test]
    async fn view_listener_writes_the_initial_and_the_changed_view() {
        let (tx, rx) = watch::channel(View::Loading { location_count: 0 });
        let mut out = Vec::new();

        let writer = async {
            view_listener(rx, &mut out).await;
        };
        let publisher = async move {
            tokio::task::yield_now().await;
            tx.send_replace(View::Ready {
                location_count: 1,
                results: vec![],
                user: Coordinate::new(1.0, 2.0),
            });
        };
        tokio::join!(writer, publisher);

        assert_eq!(
            String::from_utf8_lossy(&out),
            "Number of locations: 0\nLOADING...\n\n\
             Number of locations: 1\nNo locations found\nYour coordinates:\n  1\n  2\n\n"
        );
    }
}
