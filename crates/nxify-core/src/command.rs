// ── Command emitter ──
//
// Accumulates the configuration lines for one interface. The
// `interface <name>` context line is inserted lazily, at the head of
// the group, the first time a configuration line needs it.

/// Context line that enters interface configuration mode.
pub fn context_line(name: &str) -> String {
    format!("interface {name}")
}

/// Ordered command group for a single interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCommands {
    context: String,
    commands: Vec<String>,
}

impl InterfaceCommands {
    pub fn new(name: &str) -> Self {
        Self {
            context: context_line(name),
            commands: Vec::new(),
        }
    }

    /// Put the context line at the head of the group unless it is already there.
    pub fn ensure_context(&mut self) {
        if !self.commands.contains(&self.context) {
            self.commands.insert(0, self.context.clone());
        }
    }

    /// Append a configuration line, entering the interface context first.
    pub fn push(&mut self, command: impl Into<String>) {
        self.ensure_context();
        self.commands.push(command.into());
    }

    /// True when no line, not even the context line, has been emitted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_emits_nothing() {
        let group = InterfaceCommands::new("Ethernet1/1");
        assert!(group.is_empty());
        assert!(group.into_commands().is_empty());
    }

    #[test]
    fn context_precedes_first_command() {
        let mut group = InterfaceCommands::new("Ethernet1/1");
        group.push("mtu 9216");
        group.push("no shutdown");
        assert_eq!(
            group.into_commands(),
            ["interface Ethernet1/1", "mtu 9216", "no shutdown"]
        );
    }

    #[test]
    fn ensure_context_is_idempotent() {
        let mut group = InterfaceCommands::new("loopback0");
        group.ensure_context();
        group.ensure_context();
        group.push("no description");
        assert_eq!(group.into_commands(), ["interface loopback0", "no description"]);
    }

    #[test]
    fn bare_context_is_allowed_for_fresh_interfaces() {
        let mut group = InterfaceCommands::new("Vlan100");
        group.ensure_context();
        assert!(!group.is_empty());
        assert_eq!(group.into_commands(), ["interface Vlan100"]);
    }
}
