#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Package {
    pub name: PackageName,
    pub requires: Vec<PackageName>,
    pub base: bool,
}

impl Package {
    pub fn new(name: PackageName) -> Self {
        Self {
            name,
            requires: Vec::new(),
            base: false,
        }
    }
}
