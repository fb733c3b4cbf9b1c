//! A value typed into a masked input validates the same as its raw digits.

use crondock_format as format;
use crondock_validator::check;
use crondock_validator::foundation::Validate;
use crondock_validator::validators::{Cep, Cnpj, Cpf, Cro, Phone};
use rstest::rstest;

#[rstest]
#[case("52998224725")]
#[case("11144477735")]
#[case("12345678900")]
fn cpf_mask_does_not_change_outcome(#[case] raw: &str) {
    assert_eq!(Cpf.validate(raw), Cpf.validate(&format::cpf(raw)));
}

#[rstest]
#[case("11222333000181")]
#[case("11444777000161")]
#[case("11222333000182")]
fn cnpj_mask_does_not_change_outcome(#[case] raw: &str) {
    assert_eq!(Cnpj.validate(raw), Cnpj.validate(&format::cnpj(raw)));
}

#[rstest]
#[case("1133334444")]
#[case("11999998888")]
#[case("119999")]
fn phone_mask_does_not_change_outcome(#[case] raw: &str) {
    let phone = Phone::new();
    assert_eq!(phone.validate(raw).is_ok(), phone.validate(&format::phone(raw)).is_ok());
}

#[test]
fn cep_and_cro_masks_validate() {
    assert!(Cep.validate(&format::cep("01310100")).is_ok());
    assert!(Cro.validate(&format::cro("rj 4321")).is_ok());
}

#[rstest]
#[case("1")]
#[case("12345")]
#[case("999999999")]
fn currency_mask_keeps_amount_valid(#[case] typed: &str) {
    assert!(check::currency(typed));
    assert!(check::currency(format::currency(typed).as_str()));
    assert!(check::currency(format::currency_input(typed).as_str()));
}
