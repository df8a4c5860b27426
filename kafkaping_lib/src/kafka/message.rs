/// The payload for one producer iteration: the key is the decimal loop
/// index, the value embeds that index plus a caller supplied suffix so
/// individual runs can be told apart on the receiving end.
#[derive(Debug)]
pub struct TestMessage {
    pub key: String,
    pub value: String,
}

impl TestMessage {
    pub fn new(index: u32, suffix: u32) -> Self {
        TestMessage {
            key: index.to_string(),
            value: format!("the message {} text{}", index, suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TestMessage;

    #[test]
    fn keys_follow_the_loop_index() {
        let keys: Vec<String> = (0..10).map(|index| TestMessage::new(index, 42).key).collect();
        assert_eq!(keys, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn value_embeds_index_and_suffix() {
        let message = TestMessage::new(7, 981);
        assert_eq!(message.value, "the message 7 text981");
    }
}
