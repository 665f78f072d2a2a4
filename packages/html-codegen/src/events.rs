use crate::data::RawEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    pub doc: &'static str,
}

impl EventDescriptor {
    pub fn new(key: &'static str, display_name: &'static str) -> Self {
        Self {
            key,
            display_name,
            doc: "",
        }
    }

    /// The event name bound when the handler is registered: `OnClick` registers `click`.
    pub fn event_name(&self) -> String {
        let lower = self.display_name.to_lowercase();
        match lower.strip_prefix("on") {
            Some(name) => name.to_string(),
            None => lower,
        }
    }
}

impl From<&RawEvent> for EventDescriptor {
    fn from(raw: &RawEvent) -> Self {
        Self {
            key: raw.key,
            display_name: raw.name,
            doc: raw.doc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_name_trims_exactly_one_prefix() {
        assert_eq!(EventDescriptor::new("onclick", "OnClick").event_name(), "click");
        assert_eq!(EventDescriptor::new(" onerror", "OoNerror").event_name(), "oonerror");
        assert_eq!(EventDescriptor::new("load", "Load").event_name(), "load");
    }
}
