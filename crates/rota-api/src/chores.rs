use rand::Rng;

/// The choreable tasks offered to every household. Fixed at compile time and
/// identical across server instances; duties on stored entries are drawn from
/// this list by the client but never validated against it.
pub const HOUSEHOLD_CHORES: [&str; 14] = [
    "Vacuuming",
    "Mopping",
    "Dishes",
    "Laundry",
    "Dusting",
    "Bathroom Cleaning",
    "Kitchen Cleaning",
    "Trash Removal",
    "Window Washing",
    "Yard Work",
    "Sweeping",
    "Organizing",
    "Meal Prep",
    "Groceries",
];

/// Uniform pick from the chore list. Successive calls are independent.
pub fn random_chore() -> &'static str {
    let idx = rand::rng().random_range(0..HOUSEHOLD_CHORES.len());
    HOUSEHOLD_CHORES[idx]
}
