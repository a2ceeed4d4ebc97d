/*
[INPUT]:  None (builds a fixed IVR flow)
[OUTPUT]: Plivo XML document printed to stdout
[POS]:    Examples - markup builder usage
[UPDATE]: When the builder API changes
*/

use plivo_adapter::*;

/// Example: Build the XML an answer URL would return
///
/// Greets the caller, collects one digit, then dials a number and a SIP user.
fn main() -> std::result::Result<(), XmlError> {
    init_tracing();
    println!("=== Plivo XML Call Flow Example ===\n");

    let mut response = Element::response();

    response.add(Element::speak(
        "Thanks for calling. Press 1 for sales.",
        Attributes::new().set("voice", "WOMAN").set("language", "en-US"),
    )?)?;

    response.add(Element::get_digits(
        Attributes::new()
            .set("action", "http://example.com/menu")
            .set("method", "post")
            .set("numDigits", 1)
            .set("timeout", 10),
    )?)?;

    let dial = response.add(Element::dial(
        Attributes::new()
            .set("callerId", "15551230000")
            .set("hangupOnStar", true),
    )?)?;
    dial.add(Element::number("15559870000", Attributes::new())?)?;
    dial.add(Element::user("sip:sales@example.com", Attributes::new())?)?;

    response.add(Element::hangup(Attributes::new().set("reason", "busy"))?)?;

    println!("{}", response.to_xml()?);

    // Nesting rules are checked when children are attached
    let mut play = Element::play("http://example.com/hold.mp3", Attributes::new())?;
    match play.add(Element::hangup(Attributes::new())?) {
        Ok(_) => println!("\n✗ Unexpected: Hangup accepted under Play"),
        Err(e) => println!("\n✓ Rejected as expected: {}", e),
    }

    println!("\n✓ Call flow example complete");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
