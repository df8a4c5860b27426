use rdkafka::error::KafkaError;
use rdkafka::Message;
use tracing::{error, info, warn};

use kafkaping_lib::config::KafkaConsumerConfig;
use kafkaping_lib::kafka::listener::new_listener;

enum PollOutcome {
    Received(String),
    Empty,
    Failed(KafkaError),
}

impl PollOutcome {
    fn classify(payload: Result<Option<&[u8]>, KafkaError>) -> PollOutcome {
        match payload {
            Ok(Some(bytes)) => PollOutcome::Received(String::from_utf8_lossy(bytes).into_owned()),
            Ok(None) => PollOutcome::Empty,
            Err(e) => PollOutcome::Failed(e),
        }
    }
}

/// Polls the assigned partition until the process is killed. Receive
/// failures are logged and polling continues, they are never fatal.
pub async fn run(config: KafkaConsumerConfig) -> Result<(), KafkaError> {
    let listener = new_listener(&config)?;

    loop {
        let outcome = match listener.recv().await {
            Ok(message) => PollOutcome::classify(Ok(message.payload())),
            Err(e) => PollOutcome::classify(Err(e)),
        };

        match outcome {
            PollOutcome::Received(text) => info!("Message received: {}", text),
            PollOutcome::Empty => warn!("Received an empty message on topic '{}'!", config.topic),
            PollOutcome::Failed(e) => error!("Failed to receive message from kafka: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use rdkafka::error::KafkaError;

    use super::PollOutcome;

    #[test]
    fn payloads_come_out_as_text() {
        let outcome = PollOutcome::classify(Ok(Some(&b"the message 0 text42"[..])));
        assert!(matches!(outcome, PollOutcome::Received(text) if text == "the message 0 text42"));
    }

    #[test]
    fn empty_payloads_are_flagged() {
        assert!(matches!(PollOutcome::classify(Ok(None)), PollOutcome::Empty));
    }

    #[test]
    fn a_failed_poll_does_not_end_the_stream() {
        let polls: [Result<Option<&[u8]>, KafkaError>; 3] = [
            Ok(Some(&b"first"[..])),
            Err(KafkaError::NoMessageReceived),
            Ok(Some(&b"second"[..])),
        ];

        let outcomes: Vec<PollOutcome> = polls.into_iter().map(PollOutcome::classify).collect();

        assert!(matches!(&outcomes[0], PollOutcome::Received(text) if text == "first"));
        assert!(matches!(&outcomes[1], PollOutcome::Failed(_)));
        assert!(matches!(&outcomes[2], PollOutcome::Received(text) if text == "second"));
    }
}
