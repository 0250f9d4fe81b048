use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{instrument, warn};

/// Hands every input line, without its line ending, to `on_line` until the input ends.
///
/// A line is the full content of the search box, so surrounding whitespace is part of the query.
#[instrument(skip_all)]
pub async fn read_input<R, F>(reader: R, mut on_line: F)
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String),
{
    let mut lines = LinesStream::new(reader.lines());
    while let Some(line) = lines.next().await {
        match line {
            Ok(line) => on_line(line),
            Err(e) => {
                warn!("⚠️ Unable to read input: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;
    use crate::search::filter;
    use pretty_assertions::assert_eq;
    use tokio::io::BufReader;

    async fn collect(input: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        read_input(BufReader::new(input), |line| lines.push(line)).await;
        lines
    }

    #[tokio::test]
    async fn read_input_keeps_whitespace_that_belongs_to_the_query() {
        let lines = collect(b"new \n  al\n\n").await;

        assert_eq!(lines, vec!["new ".to_string(), "  al".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn read_input_strips_only_the_line_ending() {
        let lines = collect(b"new \r\nnorway\r\nnepal").await;

        assert_eq!(lines, vec!["new ".to_string(), "norway".to_string(), "nepal".to_string()]);
    }

    #[tokio::test]
    async fn a_trailing_space_narrows_the_search() {
        let locations = vec![Location::new("Newfoundland", 53.0, -60.0), Location::new("New Zealand", -41.0, 174.0)];

        let lines = collect(b"new \n").await;
        let results = filter(&lines[0], &locations);

        assert_eq!(results, vec![Location::new("New Zealand", -41.0, 174.0)]);
    }
}
