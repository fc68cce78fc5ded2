use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// Walks a text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    position: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: 0,
        }
    }

    pub fn revealed(&self) -> &str {
        &self.text[..self.position]
    }

    pub fn is_done(&self) -> bool {
        self.position == self.text.len()
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reveal {
    Finished,
    Cancelled,
}

/// Feeds `typewriter` to `on_char`, one character per `period`, until the
/// text runs out or `token` is cancelled. A zero period reveals everything
/// at once.
pub async fn reveal<F>(
    typewriter: &mut Typewriter,
    period: Duration,
    token: &CancellationToken,
    mut on_char: F,
) -> Reveal
where
    F: FnMut(char),
{
    if token.is_cancelled() {
        return Reveal::Cancelled;
    }
    if period.is_zero() {
        typewriter.by_ref().for_each(&mut on_char);
        return Reveal::Finished;
    }

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => return Reveal::Cancelled,
            _ = ticker.tick() => match typewriter.next() {
                Some(c) => on_char(c),
                None => return Reveal::Finished,
            },
        }
    }
}

/// Runs at most one reveal at a time; starting a new one cancels the last.
#[derive(Debug)]
pub struct Revealer {
    period: Duration,
    current: Option<CancellationToken>,
}

impl Revealer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            current: None,
        }
    }

    pub fn start<F>(&mut self, text: String, on_char: F) -> JoinHandle<Reveal>
    where
        F: FnMut(char) + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.current = Some(token.clone());
        let period = self.period;

        tokio::spawn(async move {
            let mut typewriter = Typewriter::new(text);
            reveal(&mut typewriter, period, &token, on_char).await
        })
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_typewriter_walks_characters() {
        // Arrange
        let mut typewriter = Typewriter::new("né🚀");

        // Act
        let first = typewriter.next();
        let revealed = typewriter.revealed().to_string();
        let rest = typewriter.by_ref().collect::<String>();

        // Assert
        assert_eq!(first, Some('n'));
        assert_eq!(revealed, "n");
        assert_eq!(rest, "é🚀");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.revealed(), "né🚀");
    }

    #[test]
    fn test_restart() {
        let mut typewriter = Typewriter::new("abc");
        typewriter.by_ref().for_each(drop);

        typewriter.restart();

        assert_eq!(typewriter.revealed(), "");
        assert_eq!(typewriter.collect::<String>(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_finishes() {
        let mut typewriter = Typewriter::new("# Plan");
        let mut seen = String::new();

        let outcome = reveal(
            &mut typewriter,
            Duration::from_millis(5),
            &CancellationToken::new(),
            |c| seen.push(c),
        )
        .await;

        assert_eq!(outcome, Reveal::Finished);
        assert_eq!(seen, "# Plan");
    }

    #[tokio::test]
    async fn test_zero_period_reveals_at_once() {
        let mut typewriter = Typewriter::new("abc");
        let mut seen = String::new();

        let outcome = reveal(
            &mut typewriter,
            Duration::ZERO,
            &CancellationToken::new(),
            |c| seen.push(c),
        )
        .await;

        assert_eq!(outcome, Reveal::Finished);
        assert_eq!(seen, "abc");
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let mut typewriter = Typewriter::new("abc");
        let token = CancellationToken::new();
        token.cancel();

        let outcome =
            reveal(&mut typewriter, Duration::from_millis(5), &token, |_| {})
                .await;

        assert_eq!(outcome, Reveal::Cancelled);
        assert_eq!(typewriter.revealed(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_result_cancels_running_reveal() {
        // Arrange
        let mut revealer = Revealer::new(Duration::from_secs(1));
        let first_seen = Arc::new(Mutex::new(String::new()));
        let second_seen = Arc::new(Mutex::new(String::new()));

        // Act
        let first = {
            let seen = first_seen.clone();
            revealer.start("x".repeat(100), move |c| seen.lock().unwrap().push(c))
        };
        let second = {
            let seen = second_seen.clone();
            revealer.start("done".to_string(), move |c| {
                seen.lock().unwrap().push(c)
            })
        };

        // Assert
        assert_eq!(first.await.unwrap(), Reveal::Cancelled);
        assert_eq!(second.await.unwrap(), Reveal::Finished);
        assert!(first_seen.lock().unwrap().len() < 100);
        assert_eq!(*second_seen.lock().unwrap(), "done");
    }
}
