//! Word pools for synthetic people

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Abel", "Ada", "Adrian", "Alice", "Amara", "Anna", "Arthur", "Ben", "Bianca",
    "Bob", "Caleb", "Camila", "Charlie", "Chloe", "Clara", "Daniel", "Diana", "Dominic", "Edward",
    "Elena", "Ella", "Emil", "Fiona", "Felix", "Frank", "Gabriel", "George", "Grace", "Hana",
    "Helen", "Henry", "Ines", "Isaac", "Isabel", "Ivy", "Jack", "James", "Jane", "Jasper",
    "John", "Jonas", "Kai", "Katie", "Kelly", "Leo", "Liam", "Lucia", "Maya", "Mia",
    "Nathan", "Nina", "Noah", "Olivia", "Omar", "Paul", "Priya", "Quincy", "Rachel", "Ravi",
    "Rosa", "Sam", "Sofia", "Steve", "Tina", "Theo", "Ursula", "Victor", "Wendy", "Xavier",
    "Yara", "Yusuf", "Zack", "Zoe",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Adams", "Alvarez", "Baker", "Brooks", "Brown", "Campbell", "Chen", "Clark", "Davis", "Diaz",
    "Doe", "Edwards", "Evans", "Fischer", "Ford", "Garcia", "Grant", "Green", "Hall", "Harris",
    "Hill", "Ito", "Jackson", "Johnson", "Jones", "Kaur", "King", "Knight", "Kowalski", "Lewis",
    "Lopez", "Martin", "Moore", "Murphy", "Nelson", "Nguyen", "Novak", "Owens", "Parker", "Patel",
    "Phillips", "Quinn", "Reed", "Roberts", "Rossi", "Sato", "Schmidt", "Scott", "Smith", "Stevens",
    "Thomas", "Turner", "Underwood", "Vasquez", "Walker", "Watson", "White", "Wright", "Xanders",
    "Young", "Zimmerman",
];

pub(crate) const DEPARTMENTS: &[&str] = &[
    "Automotive", "Baby", "Beauty", "Books", "Clothing", "Computers", "Electronics", "Games",
    "Garden", "Grocery", "Health", "Home", "Industrial", "Jewelery", "Kids", "Movies", "Music",
    "Outdoors", "Shoes", "Sports", "Tools", "Toys",
];

/// The fixed 40-person team: (full name, department)
pub(crate) const CLASSIC_TEAM: &[(&str, &str)] = &[
    ("John Doe", "Engineering"),
    ("Jane Smith", "Marketing"),
    ("Alice Johnson", "Sales"),
    ("Bob Brown", "Human Resources"),
    ("Charlie Davis", "Engineering"),
    ("Diana Evans", "Finance"),
    ("Edward Green", "Legal"),
    ("Fiona Hill", "Marketing"),
    ("George King", "Operations"),
    ("Helen Lewis", "Sales"),
    ("Ivy Martin", "Engineering"),
    ("Jack Nelson", "Legal"),
    ("Kelly Owens", "Finance"),
    ("Liam Parker", "Marketing"),
    ("Mia Quinn", "Operations"),
    ("Nathan Reed", "Human Resources"),
    ("Olivia Scott", "Engineering"),
    ("Paul Turner", "Sales"),
    ("Quincy White", "Finance"),
    ("Rachel Young", "Legal"),
    ("Steve Adams", "Marketing"),
    ("Tina Brooks", "Operations"),
    ("Ursula Clark", "Sales"),
    ("Victor Diaz", "Engineering"),
    ("Wendy Edwards", "Finance"),
    ("Xavier Ford", "Human Resources"),
    ("Yara Grant", "Marketing"),
    ("Zack Harris", "Legal"),
    ("Anna Jones", "Operations"),
    ("Ben Knight", "Sales"),
    ("Clara Moore", "Human Resources"),
    ("David Phillips", "Engineering"),
    ("Ella Roberts", "Marketing"),
    ("Frank Stevens", "Finance"),
    ("Grace Thomas", "Sales"),
    ("Henry Underwood", "Operations"),
    ("Isabel Vasquez", "Legal"),
    ("James Watson", "Marketing"),
    ("Katie Xanders", "Engineering"),
    ("Leo Young", "Human Resources"),
];
