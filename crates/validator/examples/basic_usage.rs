//! Basic usage example for crondock-validator

use crondock_validator::prelude::*;

fn main() {
    let typed = "529982247";
    let masked = crondock_format::cpf(typed);
    println!("typed {typed:?}, field shows {masked:?}");

    for cpf in ["529.982.247-25", "529.982.247-26", "111.111.111-11", "529.982"] {
        match Cpf.validate(cpf) {
            Ok(()) => println!("✓ {cpf} is a valid CPF"),
            Err(e) => println!("✗ {cpf}: {e}"),
        }
    }

    let name = min_length(3).and(max_length(100));
    match name.validate("Al") {
        Ok(()) => println!("✓ 'Al' is a valid name"),
        Err(e) => println!("✗ 'Al' is too short: {e}"),
    }
}
