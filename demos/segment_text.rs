//! Segmenting Thai Text
//!
//! Segment a few sentences with the bundled dictionary, then read a number
//! aloud.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example segment_text
//! ```

use kham::numeral::{bahttext, num_to_thaiword};
use kham::{Segmenter, Trie};

fn main() -> kham::Result<()> {
    env_logger::init();

    let segmenter = Segmenter::new();
    let document = "ภาษาไทยง่ายนิดเดียว วันนี้ฉันกินข้าวกับเพื่อน 2 คน\nขอบคุณครับ";

    let words = segmenter.segment(document, false)?;
    println!("Document: {} chars", document.chars().count());
    println!("Words: {}\n", words.len());
    println!("{}", words.join("|"));

    // Long text goes through safe mode chunking
    let long = "ประเทศไทยมีวัฒนธรรมสวยงาม".repeat(20);
    let words = segmenter.segment(&long, true)?;
    println!("\nSafe mode: {} words from {} chars", words.len(), long.chars().count());

    // A custom dictionary changes what counts as a word
    let dict = Trie::new(["กิน", "ข้าว", "กับ", "เพื่อน"]);
    let words = segmenter.with_dictionary(&dict).segment("กินข้าวกับเพื่อน", false)?;
    println!("\nCustom dictionary: {}", words.join("|"));

    println!("\n{} = {}", 1_234_567, num_to_thaiword(1_234_567));
    println!("{} = {}", 99.75, bahttext(99.75)?);

    Ok(())
}
