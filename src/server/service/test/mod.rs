mod banner;
mod blog;
mod city;
mod property;
mod review;
