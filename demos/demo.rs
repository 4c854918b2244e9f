//! End-to-end demo of the dealer and evaluator.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows the full flow a browser view would drive:
//!
//! 1. **Dealt hands** — a seeded [`Session`] deals eleven hands, enough to
//!    exhaust the deck once and trigger the automatic reshuffle, and each
//!    dealt string is classified.
//! 2. **Typed hands** — user-style input, one per score category, including
//!    the documented wheel limitation.
//! 3. **Invalid input** — every parse error with its message.
//! 4. **View payloads** — the JSON the web adapter hands to the view.

use draw_poker::web_adapter;
use draw_poker::{Hand, Session};

fn main() {
    // ── Dealt hands ──────────────────────────────────────────────────────
    // Seeded for reproducible output. Deal 11 hands: the 11th exhausts the
    // deck (50 cards dealt) and forces a reshuffle mid-stream.
    println!();
    println!("══ Eleven deals from one seeded session ══");
    println!();
    let mut session = Session::new(Some(42));
    for i in 1..=11 {
        let dealt = session.deal();
        let hand = session.play(&dealt).expect("dealt hands always parse");
        let note = if i == 11 { "  (after reshuffle)" } else { "" };
        println!("  deal {i:>2}: {dealt:<17} -> {}{note}", hand.score());
    }

    // ── Typed hands ──────────────────────────────────────────────────────
    println!();
    println!("══ One hand per category ══");
    println!();
    let hands = [
        "10c Jc Qc Kc Ac",
        "4d 5d 6d 7d 8d",
        "2c 2d 2h 2s 3c",
        "2c 2d 3h 3s 3c",
        "2h 6h 9h Jh Kh",
        "5c 6d 7h 8s 9c",
        "9c 9d 9h 2s 5c",
        "3c 3d 8h 8s Ac",
        "Qc Qd 2h 7s 9c",
        "2c 4d 7h 9s Kc",
        // The wheel: ace is always high, so this is not a straight.
        "Ac 2d 3h 4s 5c",
    ];
    for input in hands {
        match Hand::new(input) {
            Ok(hand) => println!("  {input:<17} -> {}", hand.score()),
            Err(err) => println!("  {input:<17} -> error: {err}"),
        }
    }

    // ── Invalid input ────────────────────────────────────────────────────
    println!();
    println!("══ Parse errors ══");
    println!();
    for input in ["", "2c 2d", "1c 2d 3h 4s 5c", "2c 3d 4h 5s 6z"] {
        let err = Hand::new(input).unwrap_err();
        println!("  {input:?} -> {err}");
    }

    // ── View payloads ────────────────────────────────────────────────────
    println!();
    println!("══ JSON payloads for the view ══");
    println!();
    let state = web_adapter::deal_state(&mut session);
    println!("  deal_state: {state}");
    let state = web_adapter::play_state("2c 2d");
    println!("  play_state (invalid): {state}");
}
