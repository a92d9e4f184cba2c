//! Postgres column mapping for [`Status`].
//!
//! The status is stored as its external value in any text-family column
//! (`TEXT`, `VARCHAR`, `CHAR(1)`). Reads go through [`Status::resolve`], so
//! legacy or unknown codes load as `PENDING` instead of failing the row.
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

use crate::enums::Status;

impl Type<Postgres> for Status {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Status {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <&str as Encode<Postgres>>::encode(self.value(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Status {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let code = <&str as Decode<Postgres>>::decode(value)?;
        Ok(Status::resolve(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_a_text_column() {
        assert_eq!(
            <Status as Type<Postgres>>::type_info(),
            <String as Type<Postgres>>::type_info()
        );
    }

    #[test]
    fn accepts_text_columns() {
        let text = <String as Type<Postgres>>::type_info();
        assert!(<Status as Type<Postgres>>::compatible(&text));
    }
}
