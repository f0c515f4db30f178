use cordyceps_avl::AvlMap;

fn main() {
    let mut dict: AvlMap<i32, String> = AvlMap::new();

    dict.set(1, "aaa".to_string());
    dict.set(2, "baa".to_string());
    dict.set(-1, "baa".to_string());
    dict.set(0, "baa".to_string());
    dict.set(-2, "baa".to_string());
    dict.assert_invariants();
    println!("{dict}");

    dict.set(-3, "baa".to_string());
    dict.assert_invariants();
    println!("{dict}");

    dict.set(5, "baa".to_string());
    dict.assert_invariants();
    println!("{dict}");

    dict.erase(&2).expect("2 was inserted above");
    dict.assert_invariants();
    println!("{dict}");

    let end = dict.end();
    let mut cursor = dict.begin();
    while cursor != end {
        if let Some((key, value)) = cursor.key_value() {
            println!("{key} {value}");
        }
        cursor.move_next();
    }

    println!("{}", dict[&-2]);

    let copy = dict.clone();
    dict.set(7, "caa".to_string());
    println!("{copy:?}");
    println!("{dict:?}");
}
