
#[cfg(test)]
mod case_create_tests;


#[cfg(test)]
mod party_create_tests;

#[cfg(test)]
mod judge_create_tests;
