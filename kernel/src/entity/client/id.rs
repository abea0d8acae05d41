use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct ClientId(i64);

impl ClientId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
