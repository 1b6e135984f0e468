use lucky_ticket::tables::Partition;
use lucky_ticket::{check, find_solution, FromDigitsError, Operator, Outcome, Sign, Ticket, TicketParseError};

// lines of `ticket<TAB>first solution`, `-` for unlucky tickets
fn read_golden(golden: &str) -> Vec<(&str, Option<&str>)> {
    golden
        .lines()
        .map(|line| {
            let mut fields = line.split('\t');
            let ticket = fields.next().unwrap();
            let solution = fields.next().unwrap_or_else(|| panic!("malformed line {:?}", line));
            (ticket, Some(solution).filter(|&s| s != "-"))
        })
        .collect()
}

// Evaluates a formatted solution independently of the solver,
// applying the operators in the order of their priority labels.
fn evaluate_formatted(expression: &str) -> f64 {
    let lhs = expression
        .strip_suffix(" = 100")
        .unwrap_or_else(|| panic!("{:?} doesn't end in ` = 100`", expression));
    let mut tokens = lhs.split(' ').peekable();

    let mut operands: Vec<f64> = vec![tokens.next().unwrap().parse().unwrap()];
    let mut operators: Vec<(u8, &str)> = vec![];
    while let Some(label) = tokens.next() {
        let label: u8 = label.trim_start_matches('(').trim_end_matches(')').parse().unwrap();
        let mut symbol = tokens.next().unwrap();
        if tokens.peek() == Some(&"-") {
            tokens.next();
            symbol = match symbol {
                "*" => "* -",
                "/" => "/ -",
                _ => panic!("unexpected `-` after {:?} in {:?}", symbol, expression),
            };
        }
        operators.push((label, symbol));
        operands.push(tokens.next().unwrap().parse().unwrap());
    }

    for label in 1..=operators.len() as u8 {
        let pos = operators.iter().position(|&(l, _)| l == label).unwrap();
        let (left, right) = (operands[pos], operands[pos + 1]);
        operands[pos] = match operators[pos].1 {
            "+" => left + right,
            "-" => left - right,
            "*" => left * right,
            "/" => left / right,
            "* -" => left * -right,
            "/ -" => left / -right,
            other => panic!("unknown operator {:?}", other),
        };
        operands.remove(pos + 1);
        operators.remove(pos);
    }
    assert_eq!(operands.len(), 1);
    operands[0]
}

#[test]
fn parse() {
    let ticket: Ticket = "012345".parse().unwrap();
    assert_eq!(ticket.digits(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(ticket.to_string(), "012345");
}

#[test]
fn parse_wrong_length() {
    assert_eq!("".parse::<Ticket>(), Err(TicketParseError::WrongLength(0)));
    assert_eq!("12345".parse::<Ticket>(), Err(TicketParseError::WrongLength(5)));
    assert_eq!("1234567".parse::<Ticket>(), Err(TicketParseError::WrongLength(7)));
    // counted in characters, not bytes
    assert_eq!("12345é".parse::<Ticket>(), Err(TicketParseError::InvalidCharacter { position: 5, ch: 'é' }));
}

#[test]
fn parse_invalid_character() {
    assert_eq!(
        "12a456".parse::<Ticket>(),
        Err(TicketParseError::InvalidCharacter { position: 2, ch: 'a' })
    );
    assert_eq!(
        " 12345".parse::<Ticket>(),
        Err(TicketParseError::InvalidCharacter { position: 0, ch: ' ' })
    );
    assert_eq!(
        "-12345".parse::<Ticket>(),
        Err(TicketParseError::InvalidCharacter { position: 0, ch: '-' })
    );
    // non-ascii digits are rejected
    assert_eq!(
        "١٢٣٤٥٦".parse::<Ticket>(),
        Err(TicketParseError::InvalidCharacter { position: 0, ch: '١' })
    );
}

#[test]
fn from_digits() {
    assert_eq!(Ticket::from_digits([1, 2, 3, 4, 5, 6]).unwrap().to_string(), "123456");
    assert_eq!(
        Ticket::from_digits([1, 2, 3, 10, 5, 6]),
        Err(FromDigitsError { position: 3, value: 10 })
    );
}

#[test]
fn split_into_groups() {
    let ticket: Ticket = "007100".parse().unwrap();
    assert_eq!(ticket.groups(Partition::new([3, 3, 0, 0, 0, 0])), [7, 100]);
    assert_eq!(ticket.groups(Partition::new([6, 0, 0, 0, 0, 0])), [7100]);
    assert_eq!(ticket.groups(Partition::new([1, 1, 1, 1, 1, 1])), [0, 0, 7, 1, 0, 0]);
    assert_eq!(ticket.groups(Partition::new([2, 1, 3, 0, 0, 0])), [0, 7, 100]);
}

#[test]
fn generated_tickets_are_valid() {
    for _ in 0..100 {
        let ticket = Ticket::generate();
        assert!(ticket.digits().iter().all(|&d| d <= 9));
        assert_eq!(ticket.to_string().parse::<Ticket>(), Ok(ticket));
    }
}

#[test]
fn codes_roundtrip() {
    for (code, &op) in (1..).zip(Operator::ALL.iter()) {
        assert_eq!(op.code(), code);
        assert_eq!(Operator::from_code(code), Some(op));
    }
    assert_eq!(Operator::from_code(0), None);
    assert_eq!(Operator::from_code(7), None);
}

#[test]
fn arithmetic() {
    assert_eq!(Operator::Add.apply(7.0, 3.0), Some(10.0));
    assert_eq!(Operator::Sub.apply(7.0, 3.0), Some(4.0));
    assert_eq!(Operator::Mul.apply(7.0, 3.0), Some(21.0));
    assert_eq!(Operator::Div.apply(9.0, 2.0), Some(4.5));
    assert_eq!(Operator::MulNeg.apply(7.0, 3.0), Some(-21.0));
    assert_eq!(Operator::DivNeg.apply(9.0, 2.0), Some(-4.5));
}

#[test]
fn division_by_zero_is_refused() {
    assert_eq!(Operator::Div.apply(1.0, 0.0), None);
    assert_eq!(Operator::DivNeg.apply(1.0, 0.0), None);
    assert_eq!(Operator::Div.apply(0.0, 0.0), None);
    // zero on the left is fine
    assert_eq!(Operator::Div.apply(0.0, 5.0), Some(0.0));
    assert_eq!(Operator::Mul.apply(5.0, 0.0), Some(0.0));
}

#[test]
fn operator_symbols() {
    let symbols: Vec<_> = Operator::ALL.iter().map(|op| op.to_string()).collect();
    assert_eq!(symbols, ["+", "-", "*", "/", "* -", "/ -"]);
}

#[test]
fn sign() {
    assert_eq!(Sign::Positive.apply(12.0), 12.0);
    assert_eq!(Sign::Negative.apply(12.0), -12.0);
}

#[test]
fn outcomes() {
    match check("000100") {
        Outcome::Found(solution) => assert_eq!(solution.to_string(), "100 = 100"),
        other => panic!("expected a solution, got {:?}", other),
    }
    assert_eq!(check("12345"), Outcome::InvalidInput(TicketParseError::WrongLength(5)));
    assert_eq!(check("010203"), Outcome::NotFound);
    assert_eq!(check("010203").solution(), None);
}

#[test]
fn golden_first_solutions() {
    for (ticket, expected) in read_golden(include_str!("../tickets/golden.txt")) {
        let solution = find_solution(ticket).unwrap().map(|s| s.to_string());
        assert_eq!(solution.as_deref(), expected, "ticket {}", ticket);
    }
}

#[test]
fn readme() {
    let solution = find_solution("123456").unwrap().unwrap();
    assert_eq!(solution.to_string(), "-1 (3) + 23 (1) - 4 (2) * 5 (4) + 6 = 100");
}

#[test]
fn single_group_shortcut() {
    let solution = find_solution("000100").unwrap().unwrap();
    assert_eq!(solution.to_string(), "100 = 100");
    assert!(solution.steps().is_empty());
    assert_eq!(solution.first_operand(), 100);
}

#[test]
fn hundred_thousand_is_not_a_single_group_hit() {
    let solution = find_solution("100000").unwrap().unwrap();
    assert_eq!(solution.to_string(), "100 (1) + 0 = 100");
}

#[test]
fn all_zeros_is_unlucky_without_fault() {
    assert_eq!(find_solution("000000"), Ok(None));
    assert_eq!(check("000000"), Outcome::NotFound);
    let report = "000000".parse::<Ticket>().unwrap().search(1).unwrap();
    assert!(report.stats.division_guards > 0);
}

#[test]
fn invalid_input_has_no_solution() {
    for input in &["", "12345", "1234567", "12a456", "12 456", "+12345", "１２３４５６"] {
        assert_eq!(find_solution(input), Ok(None), "input {:?}", input);
        match check(input) {
            Outcome::InvalidInput(_) => {}
            other => panic!("input {:?} gave {:?}", input, other),
        }
    }
    assert_eq!(
        check("12a456"),
        Outcome::InvalidInput(TicketParseError::InvalidCharacter { position: 2, ch: 'a' })
    );
}

#[test]
fn repeated_solving_is_deterministic() {
    for ticket in &["123456", "314159", "075954"] {
        assert_eq!(find_solution(ticket), find_solution(ticket));
    }
}

#[test]
fn formatted_solutions_evaluate_to_100() {
    for (_, expected) in read_golden(include_str!("../tickets/golden.txt")) {
        if let Some(expression) = expected {
            let value = evaluate_formatted(expression);
            assert!((value - 100.0).abs() < 1e-9, "{} evaluates to {}", expression, value);
        }
    }
}

#[test]
fn many_solutions_all_evaluate_to_100() {
    let ticket: Ticket = "123456".parse().unwrap();
    let solutions = ticket.solutions_at_most(200).unwrap();
    assert_eq!(solutions.len(), 200);
    assert_eq!(Some(solutions[0]), ticket.solution().unwrap());
    for solution in &solutions {
        let formatted = solution.to_string();
        let value = evaluate_formatted(&formatted);
        assert!((value - 100.0).abs() < 1e-9, "{} evaluates to {}", formatted, value);
        let replayed = solution.evaluate().unwrap().unwrap();
        assert!((replayed - 100.0).abs() < 1e-9);
    }
}

#[test]
fn more_solutions_extend_the_first_ones() {
    let ticket: Ticket = "999999".parse().unwrap();
    let few = ticket.solutions_at_most(5).unwrap();
    let many = ticket.solutions_at_most(20).unwrap();
    assert_eq!(&many[..5], &few[..]);
}

#[test]
fn lucky() {
    assert_eq!("555555".parse::<Ticket>().unwrap().is_lucky(), Ok(true));
    assert_eq!("010203".parse::<Ticket>().unwrap().is_lucky(), Ok(false));
}

// this test is probabilistic in nature
// if an error occurs, note down the ticket that it generated
#[test]
fn random_tickets_never_fault() {
    for _ in 0..10 {
        let ticket = Ticket::generate();
        match ticket.solution() {
            Ok(Some(solution)) => {
                let value = evaluate_formatted(&solution.to_string());
                assert!((value - 100.0).abs() < 1e-9, "ticket {}: {}", ticket, solution);
            }
            Ok(None) => {}
            Err(e) => panic!("ticket {} made the solver fault: {}", ticket, e),
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_ticket_and_solution() {
    let ticket: Ticket = serde_json::from_str("\"123456\"").unwrap();
    assert_eq!(ticket.to_string(), "123456");
    assert!(serde_json::from_str::<Ticket>("\"12345\"").is_err());
    assert_eq!(serde_json::to_string(&ticket).unwrap(), "\"123456\"");

    let solution = ticket.solution().unwrap().unwrap();
    assert_eq!(
        serde_json::to_string(&solution).unwrap(),
        "\"-1 (3) + 23 (1) - 4 (2) * 5 (4) + 6 = 100\""
    );
}
