use e20_core::{Addr, CacheHierarchy, parse_cache_arg};

#[test]
fn two_way_set_evicts_lru_across_five_loads() {
    let config = parse_cache_arg("4,2,1").unwrap();
    assert_eq!(config.l1.num_lines, 2);
    let mut hierarchy = CacheHierarchy::new(config);

    let pc = Addr::new(0);
    let statuses: Vec<&'static str> = [0u32, 2, 4, 2, 6]
        .into_iter()
        .map(|addr| hierarchy.on_load(pc, Addr::new(addr))[0].status)
        .collect();

    assert_eq!(statuses, ["MISS", "MISS", "MISS", "HIT", "MISS"]);
}

#[test]
fn cache_config_rejects_five_field_arity() {
    assert!(parse_cache_arg("1,2,3,4,5").is_err());
}
