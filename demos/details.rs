use rnokpp::*;

fn main() {
    // ── 1. Decoding known numbers ─────────────────────────────────────
    println!("=== Details ===");
    for number in ["3652504575", "3068208400", "1234567890", "abc"] {
        println!("  {number}: {}", get_details(number));
    }

    // ── 2. Why a number is invalid ────────────────────────────────────
    println!("\n=== Errors ===");
    for number in ["3652504576", "123456789", "12345678X0", "0000000000"] {
        match parse(number) {
            Ok(r) => println!("  {number}: ok ({})", r.details()),
            Err(e) => println!("  {number}: {e} [{:?}]", e.kind()),
        }
    }

    // ── 3. Generation ─────────────────────────────────────────────────
    println!("\n=== Generated ===");
    if let Some(birthday) = chrono::NaiveDate::from_ymd_opt(1991, 8, 24) {
        match generate_rnokpp(birthday, Gender::Female) {
            Ok(r) => println!("  for {birthday}: {r} ({})", get_details(&r)),
            Err(e) => println!("  generation failed: {e}"),
        }
    }
    for r in generate_random_rnokpp_n(5) {
        println!("  random: {r} ({})", get_details(&r));
    }
}
