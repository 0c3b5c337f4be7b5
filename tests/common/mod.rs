use std::path::{Path, PathBuf};

/// Seven raw rows: one untitled, one exact duplicate of "X".
pub const RAW_TITLES: &str = "\
id,title,type,description,release_year,age_certification,runtime,genres,production_countries,seasons,imdb_id,imdb_score,imdb_votes,tmdb_popularity,tmdb_score
tm1,Alpha,MOVIE,A heist goes wrong,2000,R,100,\"['Drama', 'Comedy']\",['US'],,tt0000001,8.0,1000,10.0,7.0
ts1,Beta,SHOW,,2010,,50,['drama'],['GB'],3,tt0000002,5.0,,20.0,6.0
tm2,X,MOVIE,A stranger arrives,2015,PG,90,\"['drama', 'comedy']\",['US'],3,,,300,5.0,
tm3,,MOVIE,Nobody knows,2001,R,90,['drama'],['US'],,tt0000004,9.9,1,1.0,9.9
tm4,Delta,MOVIE,A long road,2020,R,95,\"['drama', 'comedy']\",['US'],,tt0000005,7.0,200,30.0,8.0
ts2,Gamma,SHOW,Detectives at work,2018,TV-MA,45,['crime'],['DE'],2,tt0000006,6.0,400,40.0,5.0
tm2,X,MOVIE,A stranger arrives,2015,PG,90,\"['drama', 'comedy']\",['US'],3,,,300,5.0,
";

pub const YEAR: i32 = 2025;

pub fn write_raw(dir: &Path) -> PathBuf {
    let path = dir.join("titles.csv");
    std::fs::write(&path, RAW_TITLES).unwrap();
    path
}
