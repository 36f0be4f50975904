/// Stateless producer of greeting strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Greet `name`, or the world when no name is given.
    ///
    /// Emits exactly one event per call: DEBUG on the fallback branch, INFO
    /// on the named branch. Total for every input.
    pub fn greet(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => {
                tracing::info!("Greeting user: {}", name);
                format!("Hello {}", name)
            }
            None => {
                tracing::debug!("No name provided, falling back to default");
                "Hello World".to_string()
            }
        }
    }
}
