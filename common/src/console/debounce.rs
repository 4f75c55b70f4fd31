/// Ticket based debouncing for the search box.
///
/// Every keystroke takes a new ticket and schedules a timer carrying it; when a
/// timer fires only the newest ticket is honoured, so the filter runs once
/// after the input has been quiet for the whole window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    pub fn ticket(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.ticket();
        let second = debouncer.ticket();

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
