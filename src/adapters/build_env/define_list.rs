use crate::domain::models::define::DefineParseError;
use crate::domain::models::Define;
use crate::domain::ports::BuildEnvironment;

/// Vec-backed define collection for one build invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineList {
    defines: Vec<Define>,
}

impl DefineList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list with defines the host build already carries, each in
    /// `NAME` or `NAME=VALUE` form.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, DefineParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defines = specs
            .into_iter()
            .map(|spec| spec.as_ref().parse())
            .collect::<Result<Vec<Define>, _>>()?;
        Ok(Self { defines })
    }

    pub fn len(&self) -> usize {
        self.defines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Define> {
        self.defines.iter().find(|define| define.name == name)
    }
}

impl From<Vec<Define>> for DefineList {
    fn from(defines: Vec<Define>) -> Self {
        Self { defines }
    }
}

impl BuildEnvironment for DefineList {
    fn append_defines(&mut self, defines: Vec<Define>) {
        self.defines.extend(defines);
    }

    fn defines(&self) -> &[Define] {
        &self.defines
    }
}
