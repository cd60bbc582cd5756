use canonical::{SegmentConfig, comparison_key, group_by_system, normalize_tag, resolve_tag};

fn main() {
    let tags = [
        "=3601.009-JVZ0025",
        "3601.001:04-KOMP123",
        "3601.010-B",
        "3601.009-JVZ0026",
        "not a tag",
    ];

    let cfg = SegmentConfig::full_tag();
    for raw in tags {
        match normalize_tag(raw) {
            Some(code) => println!("{raw:24} -> key {}", comparison_key(&code, &cfg)),
            None => println!("{raw:24} -> dropped (malformed)"),
        }
    }

    println!();
    for group in group_by_system(tags) {
        let components: Vec<&str> = group
            .components
            .iter()
            .map(|c| c.component_part.as_str())
            .collect();
        println!("system {:12} components {components:?}", group.base_system);
    }

    println!();
    let parsed = resolve_tag("3601.001:04-KOMP123").expect("composite tag resolves");
    println!(
        "lookup: system {} (base {}) component {}",
        parsed.system_code, parsed.base_system_code, parsed.component_tag
    );
}
