use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    /// Monthly budget ceiling. Zero means "unset".
    pub budget: Decimal,
}

impl User {
    pub fn has_budget(&self) -> bool {
        self.budget > Decimal::ZERO
    }
}
