/// Identity of a generated RPC callback
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Callback {
    path: String,
    name: String,
}

impl Callback {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Callback {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Data path the callback subscribes to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Identifier fragment derived from the RPC name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the generated C function, e.g.
    /// `system_subscription_rpc_set_current_datetime`
    pub fn callback_name(&self, prefix: &str) -> String {
        format!("{prefix}_subscription_rpc_{}", self.name)
    }

    /// Name of the macro holding the data path, e.g.
    /// `SYSTEM_SET_CURRENT_DATETIME_YANG_PATH`
    pub fn path_constant(&self, prefix: &str) -> String {
        format!("{prefix}_{}_YANG_PATH", self.name).to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identifiers() {
        let cb = Callback::new("/ietf-system:set-current-datetime", "set_current_datetime");
        assert_eq!(
            cb.callback_name("system"),
            "system_subscription_rpc_set_current_datetime"
        );
        assert_eq!(
            cb.path_constant("system"),
            "SYSTEM_SET_CURRENT_DATETIME_YANG_PATH"
        );
    }
}
