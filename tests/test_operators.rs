use simplega::{
    breeding::{crossover::swap_prefix, SinglePointCrossover, UniformMutation},
    error::GeneticError,
    genotype::{GeneBounds, Genotype},
    population::{initialize, Population},
    rng::RandomNumberGenerator,
    selection::RouletteWheelSelection,
};

fn random_population(size: usize, num_genes: usize, seed: u64) -> Population {
    let bounds: Vec<GeneBounds> = (0..num_genes)
        .map(|i| GeneBounds::new(-(i as f64) - 1.0, i as f64 + 1.0).unwrap())
        .collect();
    let mut rng = RandomNumberGenerator::from_seed(seed);
    initialize(&bounds, num_genes, size, &mut rng).unwrap()
}

fn gene_bits(population: &Population) -> Vec<Vec<u64>> {
    population
        .members()
        .iter()
        .map(|m| m.gene.iter().map(|g| g.to_bits()).collect())
        .collect()
}

#[test]
fn test_selection_statistics() {
    let mut population = random_population(20, 2, 1);
    for (i, member) in population.members_mut().iter_mut().enumerate() {
        member.fitness = (i + 1) as f64;
    }

    RouletteWheelSelection::new()
        .calculate_probabilities(population.members_mut())
        .unwrap();

    let members = population.members();
    let relative_sum: f64 = members.iter().map(|m| m.relative_fitness).sum();
    assert!((relative_sum - 1.0).abs() < 1e-9);
    for pair in members.windows(2) {
        assert!(pair[1].cumulative_fitness >= pair[0].cumulative_fitness);
    }
    assert!((members[members.len() - 1].cumulative_fitness - 1.0).abs() < 1e-9);
}

#[test]
fn test_selection_with_zero_total_fitness() {
    let mut population = random_population(6, 3, 2);
    let before = population.clone();
    let mut rng = RandomNumberGenerator::from_seed(2);

    let result = RouletteWheelSelection::new().select(&mut population, &mut rng);

    match result {
        Err(ref e @ GeneticError::Arithmetic(_)) => assert!(e.is_arithmetic()),
        _ => panic!("Expected Arithmetic error"),
    }
    assert_eq!(population, before);
}

#[test]
fn test_zero_crossover_probability_is_noop() {
    let mut population = random_population(30, 3, 3);
    let before = gene_bits(&population);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let crossed = SinglePointCrossover::new(0.0)
        .unwrap()
        .apply(population.members_mut(), &mut rng);

    assert_eq!(crossed, 0);
    assert_eq!(gene_bits(&population), before);
}

#[test]
fn test_crossover_only_swaps_prefixes() {
    let mut population = random_population(40, 5, 4);
    let before = population.clone();
    let mut rng = RandomNumberGenerator::from_seed(4);

    SinglePointCrossover::new(1.0)
        .unwrap()
        .apply(population.members_mut(), &mut rng);

    // With every member marked, members pair up as (0, 1), (2, 3), ...
    for pair in 0..20 {
        let (a, b) = (2 * pair, 2 * pair + 1);
        let old_a = &before.members()[a].gene;
        let old_b = &before.members()[b].gene;
        let new_a = &population.members()[a].gene;
        let new_b = &population.members()[b].gene;

        let point = (0..5).take_while(|&i| new_a[i] == old_b[i]).count();
        assert!((1..5).contains(&point));
        assert_eq!(&new_a[..point], &old_b[..point]);
        assert_eq!(&new_b[..point], &old_a[..point]);
        assert_eq!(&new_a[point..], &old_a[point..]);
        assert_eq!(&new_b[point..], &old_b[point..]);
    }
}

#[test]
fn test_crossover_is_self_inverse() {
    let population = random_population(2, 7, 5);
    let mut a = population.members()[0].clone();
    let mut b = population.members()[1].clone();

    for point in 1..7 {
        swap_prefix(&mut a, &mut b, point);
        swap_prefix(&mut a, &mut b, point);
        assert_eq!(&a, &population.members()[0]);
        assert_eq!(&b, &population.members()[1]);
    }
}

#[test]
fn test_full_mutation_redraws_every_gene() {
    let mut population = random_population(25, 4, 6);
    let before = population.clone();
    let mut rng = RandomNumberGenerator::from_seed(6);

    let mutated = UniformMutation::new(1.0)
        .unwrap()
        .apply(population.members_mut(), &mut rng);

    assert_eq!(mutated, 100);
    for (new, old) in population.members().iter().zip(before.members()) {
        assert!(new.within_bounds());
        for (g_new, g_old) in new.gene.iter().zip(&old.gene) {
            assert_ne!(g_new, g_old);
        }
    }
}

#[test]
fn test_mutation_rate_converges() {
    let q = 0.3;
    let mutation = UniformMutation::new(q).unwrap();
    let mut population = random_population(200, 10, 7);
    let mut rng = RandomNumberGenerator::from_seed(7);

    let trials = 50;
    let mutated: usize = (0..trials)
        .map(|_| mutation.apply(population.members_mut(), &mut rng))
        .sum();

    let rate = mutated as f64 / (trials * 200 * 10) as f64;
    assert!((rate - q).abs() < 0.01, "rate was {}", rate);
}

#[test]
fn test_crossover_keeps_fitness_stale() {
    let bounds = [GeneBounds::new(0.0, 1.0).unwrap(); 2];
    let mut members = vec![
        Genotype::new(vec![0.1, 0.2], &bounds),
        Genotype::new(vec![0.8, 0.9], &bounds),
    ];
    members[0].fitness = 1.0;
    members[1].fitness = 5.0;
    let mut rng = RandomNumberGenerator::from_seed(8);

    SinglePointCrossover::new(1.0)
        .unwrap()
        .apply(&mut members, &mut rng);

    assert_eq!(members[0].gene, vec![0.8, 0.2]);
    assert_eq!(members[1].gene, vec![0.1, 0.9]);
    assert_eq!(members[0].fitness, 1.0);
    assert_eq!(members[1].fitness, 5.0);
}
