use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct ClientEmail(String);

impl ClientEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct ClientPhone(String);

impl ClientPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct ClientAddress(String);

impl ClientAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
