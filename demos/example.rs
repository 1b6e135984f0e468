use lucky_ticket::{check, Outcome};

fn main() {
    for ticket in &["123456", "000100", "010203", "12a456"] {
        match check(ticket) {
            Outcome::Found(solution) => println!("{}: {}", ticket, solution),
            Outcome::NotFound => println!("{}: not lucky", ticket),
            Outcome::InvalidInput(e) => println!("{}: {}", ticket, e),
            Outcome::Fault(e) => eprintln!("{}: solver fault: {}", ticket, e),
        }
    }
}
