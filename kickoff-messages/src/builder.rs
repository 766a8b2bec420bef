use std::collections::HashMap;

/// Fills `{key}` placeholders in a static template.
///
/// Placeholders without a matching variable are left untouched so a missing
/// value shows up in the output instead of vanishing.
pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    /// Scans the template once, left to right. Inserted values are never
    /// scanned again, so a value containing `{other}` is kept literally.
    pub fn build(self) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after
                .find('}')
                .and_then(|close| self.vars.get(&after[..close]).map(|v| (close, v)));
            match value {
                Some((close, value)) => {
                    result.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    result.push('{');
                    rest = after;
                }
            }
        }
        result.push_str(rest);
        result
    }
}
