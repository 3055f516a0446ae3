use shop_macros::value_object;

#[value_object]
struct Zip {
    value: String,
}

#[value_object(debug = false)]
struct Number(i32);

#[value_object(eq = false)]
struct Money {
    amount: f64,
}

#[value_object]
enum Level {
    #[default]
    Low,
    High,
}

fn main() {
    // Debug 默认开启，应可格式化
    let _ = format!("{:?}", Zip { value: "12345-000".into() });

    let a = Zip::default();
    let _b = a.clone();
    let _eq = a == Zip { value: String::new() };

    let _ = Number(1);

    // eq = false 时仍然派生 PartialEq
    let _same = Money { amount: 1.5 } == Money { amount: 1.5 };

    let _lv: Level = Default::default();
    let _high = Level::High;
}
