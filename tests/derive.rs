#![cfg(feature = "macros")]

use std::fmt;

use objscope::{FieldKind, Inspect, Members, describe};

#[derive(Inspect)]
#[inspect(hash = Point::stable_hash)]
pub struct Point {
    pub x: i32,
    pub(crate) y: i32,
}

impl Point {
    fn stable_hash(&self) -> u64 {
        42
    }
}

#[derive(Inspect)]
#[inspect(extends = Point)]
struct Meters(f64, #[inspect(skip)] u8);

#[derive(Debug)]
enum Kind {
    Leaf,
}

#[derive(Inspect)]
struct Node {
    label: Option<String>,
    parent: Option<String>,
    tags: Option<Vec<String>>,
    scores: [u8; 3],
    #[inspect(debug)]
    flags: Vec<Option<bool>>,
    #[inspect(debug)]
    kind: Kind,
    r#type: u8,
}

#[derive(Inspect)]
pub struct Wrapper<T: fmt::Display> {
    pub inner: T,
}

#[derive(Debug)]
pub struct AccountError;

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("account error")
    }
}

#[derive(Inspect)]
#[inspect(members)]
pub struct Account {
    balance: u64,
}

#[objscope::members]
#[allow(dead_code)]
impl Account {
    pub const CURRENCY: &'static str = "EUR";
    pub(crate) const LIMITS: [u64; 2] = [10, 100];

    pub fn open() -> Self {
        Account { balance: 0 }
    }

    pub fn with_balance(balance: u64) -> Result<Account, AccountError> {
        Ok(Account { balance })
    }

    #[throws(AccountError)]
    pub fn deposit(&mut self, amount: u64) -> u64 {
        self.balance += amount;
        self.balance
    }

    #[throws(std::io::Error)]
    fn transfer(&mut self, to: &mut Account, amount: u64) -> Result<(), AccountError> {
        let _ = (to, amount);
        Ok(())
    }

    pub async fn sync(&self) {}

    pub const fn zero() -> u64 {
        0
    }

    pub(crate) fn audit(&self, (from, to): (u64, u64)) -> bool {
        from <= to
    }

    #[inspect(skip)]
    fn secret(&self) {}
}

fn lines(text: &str, title: &str) -> Vec<String> {
    let start = text.find(&format!("\n{title}:\n")).unwrap() + title.len() + 3;
    text[start..]
        .split('\n')
        .take_while(|line| line.starts_with('\t'))
        .map(|line| line[1..].to_string())
        .collect()
}

#[test]
fn test_complete_report() {
    let text = describe(Some(&Point { x: 1, y: 2 })).unwrap().unwrap();
    assert_eq!(
        text,
        "Class : derive::Point\n\
         Object: 42\n\
         Implements: \n\
         Inherits from: core::any::Any\n\
         Fields:\n\
         \t[+] x: i32 = 1\n\
         \t[#] y: i32 = 2\n\
         Constructors:\n\
         \t[+] Point(x: i32, y: i32)\n\
         Methods:\n\
         \t"
    );
}

#[test]
fn test_tuple_struct() {
    let text = describe(Some(&Meters(1.5, 9))).unwrap().unwrap();
    assert!(text.contains("\nInherits from: derive::Point\n"));
    assert_eq!(lines(&text, "Fields"), vec!["[-] 0: f64 = 1.5"]);
    assert_eq!(lines(&text, "Constructors"), vec!["[-] Meters(0: f64)"]);
}

#[test]
fn test_optional_and_debug_fields() {
    let node = Node {
        label: Some("root".into()),
        parent: None,
        tags: None,
        scores: [1, 2, 3],
        flags: vec![Some(true), None],
        kind: Kind::Leaf,
        r#type: 4,
    };
    let text = describe(Some(&node)).unwrap().unwrap();
    assert_eq!(
        lines(&text, "Fields"),
        vec![
            "[-] label: Option<String> = root",
            "[-] parent: Option<String> = null",
            "[-] tags: Option<Vec<String>> = null",
            "[-] scores: array[3] of u8 {",
            "\t[0] = 1",
            "\t[1] = 2",
            "\t[2] = 3",
            "}",
            "[-] flags: array[2] of Option<bool> {",
            "\t[0] = true",
            "\t[1] = null",
            "}",
            "[-] kind: Kind = Leaf",
            "[-] type: u8 = 4",
        ]
    );
}

#[test]
fn test_field_kinds() {
    let node = Node {
        label: None,
        parent: None,
        tags: Some(vec!["a".into()]),
        scores: [0; 3],
        flags: Vec::new(),
        kind: Kind::Leaf,
        r#type: 0,
    };
    let info = node.type_info();
    let kinds: Vec<_> = info.fields.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Reference,
            FieldKind::Reference,
            FieldKind::Array { element: "String" },
            FieldKind::Array { element: "u8" },
            FieldKind::Array {
                element: "Option<bool>"
            },
            FieldKind::Reference,
            FieldKind::Scalar,
        ]
    );
    let text = describe(Some(&node)).unwrap().unwrap();
    assert!(text.contains("[-] tags: array[1] of String {\n\t\t[0] = a\n\t}"));
    assert!(text.contains("[-] flags: array[0] of Option<bool> {}"));
}

#[test]
fn test_generic_struct() {
    let text = describe(Some(&Wrapper { inner: "boxed" })).unwrap().unwrap();
    assert!(text.starts_with("Class : derive::Wrapper<&str>\n"));
    assert!(text.contains("\n\t[+] inner: T = boxed\n"));
}

#[test]
fn test_constants_follow_fields() {
    let text = describe(Some(&Account::open())).unwrap().unwrap();
    assert_eq!(
        lines(&text, "Fields"),
        vec![
            "[-] balance: u64 = 0",
            "[+] CURRENCY: &'static str = EUR",
            "[#] LIMITS: array[2] of u64 {",
            "\t[0] = 10",
            "\t[1] = 100",
            "}",
        ]
    );
}

#[test]
fn test_declared_constructors() {
    let text = describe(Some(&Account::open())).unwrap().unwrap();
    assert_eq!(
        lines(&text, "Constructors"),
        vec![
            "[+] open()",
            "[+] with_balance(balance: u64) throws AccountError",
        ]
    );
}

#[test]
fn test_declared_methods() {
    let text = describe(Some(&Account::open())).unwrap().unwrap();
    assert_eq!(
        lines(&text, "Methods"),
        vec![
            "[+] u64 deposit(amount: u64) throws AccountError",
            "[-] () transfer(to: &mut Account, amount: u64) throws AccountError, std::io::Error",
            "[+] () sync()",
            "[+] u64 zero()",
            "[#] bool audit(arg0: (u64, u64))",
        ]
    );
}

#[test]
fn test_member_modifier_bits() {
    let methods = <Account as Members>::methods();
    let zero = methods.iter().find(|m| m.name == "zero").unwrap();
    assert!(zero.modifiers.contains(objscope::Modifiers::STATIC));
    assert!(zero.modifiers.contains(objscope::Modifiers::CONST));
    let sync = methods.iter().find(|m| m.name == "sync").unwrap();
    assert!(sync.modifiers.contains(objscope::Modifiers::ASYNC));
    assert!(!sync.modifiers.contains(objscope::Modifiers::STATIC));
    assert!(methods.iter().all(|m| m.name != "secret"));
}
